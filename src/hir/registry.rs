//! Bean registry view: a read-only projection of bean and alias declarations.
//!
//! A [`BeanRegistry`] is built once per document snapshot (or per set of
//! snapshots forming one context) and passed explicitly into every query.
//! Declarations are kept in document order; documents in the order they were
//! added.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::constants::{
    ALIAS, BEAN, BEANS, CLASS, CONSTRUCTOR_ARG, DESTROY_METHOD, FACTORY_BEAN, FACTORY_METHOD, ID,
    INDEX, INIT_METHOD, NAME, PARENT, PROPERTY, REF, TYPE, VALUE, VALUE_REF,
};
use crate::config::ResolverConfig;
use crate::syntax::{DocumentTree, NodeId, child_elements, nearest_ancestor};

/// Read an attribute, treating blank values as unset.
fn non_blank<'d>(doc: &'d dyn DocumentTree, node: NodeId, name: &str) -> Option<&'d str> {
    doc.attribute(node, name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A `<bean>` element viewed through its document.
#[derive(Clone, Copy)]
pub struct BeanDeclaration<'d> {
    doc: &'d dyn DocumentTree,
    node: NodeId,
}

impl<'d> BeanDeclaration<'d> {
    pub fn new(doc: &'d dyn DocumentTree, node: NodeId) -> Self {
        Self { doc, node }
    }

    /// The bean element enclosing `element` (or `element` itself).
    pub fn enclosing(
        doc: &'d dyn DocumentTree,
        element: NodeId,
        config: &ResolverConfig,
    ) -> Option<Self> {
        let is_bean = |node: NodeId| {
            doc.local_name(node) == BEAN && config.is_bean_namespace(doc.namespace(node))
        };
        if is_bean(element) {
            return Some(Self::new(doc, element));
        }
        nearest_ancestor(doc, element, is_bean).map(|node| Self::new(doc, node))
    }

    pub fn document(&self) -> &'d dyn DocumentTree {
        self.doc
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// A non-blank, trimmed attribute value.
    pub fn attribute(&self, name: &str) -> Option<&'d str> {
        non_blank(self.doc, self.node, name)
    }

    pub fn id(&self) -> Option<&'d str> {
        self.attribute(ID)
    }

    pub fn name(&self) -> Option<&'d str> {
        self.attribute(NAME)
    }

    pub fn class_name(&self) -> Option<&'d str> {
        self.attribute(CLASS)
    }

    pub fn factory_bean(&self) -> Option<&'d str> {
        self.attribute(FACTORY_BEAN)
    }

    pub fn factory_method(&self) -> Option<&'d str> {
        self.attribute(FACTORY_METHOD)
    }

    pub fn parent_name(&self) -> Option<&'d str> {
        self.attribute(PARENT)
    }

    pub fn init_method(&self) -> Option<&'d str> {
        self.attribute(INIT_METHOD)
    }

    pub fn destroy_method(&self) -> Option<&'d str> {
        self.attribute(DESTROY_METHOD)
    }

    /// Whether `key` names this bean by `id` or `name`.
    pub fn is_named(&self, key: &str) -> bool {
        self.id() == Some(key) || self.name() == Some(key)
    }

    /// Bean-namespace children named `local_name`, in document order.
    fn bean_children(&self, config: &ResolverConfig, local_name: &str) -> Vec<NodeId> {
        let doc = self.doc;
        child_elements(doc, self.node, local_name)
            .filter(|child| config.is_bean_namespace(doc.namespace(*child)))
            .collect()
    }

    /// `<property>` children in document order.
    pub fn properties(&self, config: &ResolverConfig) -> Vec<PropertyEntry<'d>> {
        let doc = self.doc;
        self.bean_children(config, PROPERTY)
            .into_iter()
            .map(|node| PropertyEntry {
                node,
                name: non_blank(doc, node, NAME),
                reference: non_blank(doc, node, REF),
                value_ref: non_blank(doc, node, VALUE_REF),
                value: doc.attribute(node, VALUE),
            })
            .collect()
    }

    /// `<constructor-arg>` children in document order.
    pub fn constructor_args(&self, config: &ResolverConfig) -> Vec<ConstructorArgEntry<'d>> {
        let doc = self.doc;
        self.bean_children(config, CONSTRUCTOR_ARG)
            .into_iter()
            .map(|node| ConstructorArgEntry {
                node,
                index: non_blank(doc, node, INDEX),
                name: non_blank(doc, node, NAME),
                type_name: non_blank(doc, node, TYPE),
                reference: non_blank(doc, node, REF),
                value: doc.attribute(node, VALUE),
            })
            .collect()
    }

    /// Number of declared bean-namespace constructor arguments.
    pub fn constructor_arg_count(&self, config: &ResolverConfig) -> usize {
        self.bean_children(config, CONSTRUCTOR_ARG).len()
    }

    /// Identity of this declaration across documents.
    pub(crate) fn key(&self) -> DeclarationKey {
        DeclarationKey::new(self.doc, self.node)
    }
}

impl PartialEq for BeanDeclaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BeanDeclaration<'_> {}

impl fmt::Debug for BeanDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDeclaration")
            .field("node", &self.node)
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

/// `(document address, node)` pair identifying one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct DeclarationKey(usize, NodeId);

impl DeclarationKey {
    fn new(doc: &dyn DocumentTree, node: NodeId) -> Self {
        let address = std::ptr::from_ref(doc).cast::<()>() as usize;
        Self(address, node)
    }
}

/// An `<alias name="target" alias="other"/>` element.
#[derive(Clone, Copy)]
pub struct AliasDeclaration<'d> {
    doc: &'d dyn DocumentTree,
    node: NodeId,
}

impl<'d> AliasDeclaration<'d> {
    pub fn new(doc: &'d dyn DocumentTree, node: NodeId) -> Self {
        Self { doc, node }
    }

    pub fn document(&self) -> &'d dyn DocumentTree {
        self.doc
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The alias's own name.
    pub fn alias(&self) -> Option<&'d str> {
        non_blank(self.doc, self.node, ALIAS)
    }

    /// The name the alias points at.
    pub fn target(&self) -> Option<&'d str> {
        non_blank(self.doc, self.node, NAME)
    }
}

impl PartialEq for AliasDeclaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        DeclarationKey::new(self.doc, self.node) == DeclarationKey::new(other.doc, other.node)
    }
}

impl Eq for AliasDeclaration<'_> {}

impl fmt::Debug for AliasDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliasDeclaration")
            .field("node", &self.node)
            .field("alias", &self.alias())
            .field("target", &self.target())
            .finish()
    }
}

/// A `<property>` child of a bean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyEntry<'d> {
    pub node: NodeId,
    pub name: Option<&'d str>,
    pub reference: Option<&'d str>,
    pub value_ref: Option<&'d str>,
    pub value: Option<&'d str>,
}

/// A `<constructor-arg>` child of a bean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstructorArgEntry<'d> {
    pub node: NodeId,
    pub index: Option<&'d str>,
    pub name: Option<&'d str>,
    pub type_name: Option<&'d str>,
    pub reference: Option<&'d str>,
    pub value: Option<&'d str>,
}

/// A bean found by reference, and the alias used to reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeanMatch<'d> {
    pub bean: BeanDeclaration<'d>,
    /// The first alias hop, when the name was not a direct id/name.
    pub alias: Option<AliasDeclaration<'d>>,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// All bean and alias declarations visible to a query.
pub struct BeanRegistry<'d> {
    beans: Vec<BeanDeclaration<'d>>,
    aliases: Vec<AliasDeclaration<'d>>,
    /// id/name → first declaring bean (document order).
    by_key: FxHashMap<&'d str, usize>,
    /// alias name → first alias declaration.
    by_alias: FxHashMap<&'d str, usize>,
    config: ResolverConfig,
}

impl<'d> BeanRegistry<'d> {
    /// Registry over a single document with the default configuration.
    pub fn new(doc: &'d dyn DocumentTree) -> Self {
        Self::builder(ResolverConfig::default())
            .add_document(doc)
            .build()
    }

    pub fn builder(config: ResolverConfig) -> RegistryBuilder<'d> {
        RegistryBuilder {
            beans: Vec::new(),
            aliases: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Bean declarations in registry order.
    pub fn beans(&self) -> &[BeanDeclaration<'d>] {
        &self.beans
    }

    /// Alias declarations in registry order.
    pub fn aliases(&self) -> &[AliasDeclaration<'d>] {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    /// First bean whose `id` or `name` equals `name`.
    pub fn find_bean_by_name_or_id(&self, name: &str) -> Option<BeanDeclaration<'d>> {
        self.by_key.get(name).map(|&index| self.beans[index])
    }

    /// First alias whose own `alias` attribute equals `name`.
    pub fn find_alias_by_name(&self, name: &str) -> Option<AliasDeclaration<'d>> {
        self.by_alias.get(name).map(|&index| self.aliases[index])
    }

    /// Direct id/name lookup, then a single alias hop.
    pub fn resolve_by_name_or_alias(&self, name: &str) -> Option<BeanDeclaration<'d>> {
        self.lookup_reference(name, false).map(|found| found.bean)
    }

    /// Resolve a bean reference, optionally following alias chains.
    ///
    /// Without `follow_chains` only one alias hop is taken, so
    /// `alias → alias → bean` is not found.
    pub fn lookup_reference(&self, name: &str, follow_chains: bool) -> Option<BeanMatch<'d>> {
        if let Some(bean) = self.find_bean_by_name_or_id(name) {
            return Some(BeanMatch { bean, alias: None });
        }

        let first = self.find_alias_by_name(name)?;
        let mut target = first.target()?;
        let mut seen = FxHashSet::default();
        seen.insert(name);

        loop {
            if let Some(bean) = self.find_bean_by_name_or_id(target) {
                return Some(BeanMatch {
                    bean,
                    alias: Some(first),
                });
            }
            if !follow_chains || !seen.insert(target) {
                tracing::trace!("alias '{}' does not lead to a bean", name);
                return None;
            }
            target = self.find_alias_by_name(target)?.target()?;
        }
    }
}

impl fmt::Debug for BeanRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistry")
            .field("beans", &self.beans)
            .field("aliases", &self.aliases)
            .finish()
    }
}

/// Collects declarations from one or more documents.
pub struct RegistryBuilder<'d> {
    beans: Vec<BeanDeclaration<'d>>,
    aliases: Vec<AliasDeclaration<'d>>,
    config: ResolverConfig,
}

impl<'d> RegistryBuilder<'d> {
    /// Append every declaration of `doc` in document order.
    ///
    /// Documents whose root is not a `<beans>` element contribute nothing.
    pub fn add_document(mut self, doc: &'d dyn DocumentTree) -> Self {
        match doc.root_element() {
            Some(root) if self.is_beans_group(doc, root) => self.collect(doc, root),
            _ => tracing::trace!("document has no <beans> root, skipping"),
        }
        self
    }

    pub fn build(self) -> BeanRegistry<'d> {
        let mut by_key = FxHashMap::default();
        for (index, bean) in self.beans.iter().enumerate() {
            for key in [bean.id(), bean.name()].into_iter().flatten() {
                by_key.entry(key).or_insert(index);
            }
        }

        let mut by_alias = FxHashMap::default();
        for (index, alias) in self.aliases.iter().enumerate() {
            if let Some(name) = alias.alias() {
                by_alias.entry(name).or_insert(index);
            }
        }

        BeanRegistry {
            beans: self.beans,
            aliases: self.aliases,
            by_key,
            by_alias,
            config: self.config,
        }
    }

    fn is_beans_group(&self, doc: &dyn DocumentTree, node: NodeId) -> bool {
        doc.local_name(node) == BEANS && self.config.is_bean_namespace(doc.namespace(node))
    }

    fn collect(&mut self, doc: &'d dyn DocumentTree, group: NodeId) {
        for child in doc.children(group) {
            if !self.config.is_bean_namespace(doc.namespace(child)) {
                continue;
            }
            match doc.local_name(child) {
                BEAN => self.beans.push(BeanDeclaration::new(doc, child)),
                ALIAS => self.aliases.push(AliasDeclaration::new(doc, child)),
                BEANS => self.collect(doc, child),
                _ => {}
            }
        }
    }
}
