//! Symbol resolution: attribute values to classes, methods, parameters and beans.
//!
//! Every entry point locates the enclosing bean, infers its class and then
//! picks the member. Missing links at any step give [`Resolution::Absent`].

use std::sync::Arc;

use super::reference::{ReferenceKind, ReferenceSite};
use super::registry::{AliasDeclaration, BeanDeclaration, BeanRegistry};
use crate::base::constants::FACTORY_METHOD;
use crate::base::naming::{strip_reference_suffix, to_accessor_name};
use crate::config::ResolverConfig;
use crate::metadata::{ClassDescriptor, MethodDescriptor, MethodFilter, TypeProvider};
use crate::syntax::DocumentTree;

// ============================================================================
// RESULTS
// ============================================================================

/// A method picked out of a class's method table.
#[derive(Clone, Debug, PartialEq, Eq)]
///
/// Only the resolver builds these, so the index always points into the
/// class's method table.
pub struct ResolvedMethod {
    class: Arc<ClassDescriptor>,
    index: usize,
}

impl ResolvedMethod {
    pub(crate) fn new(class: Arc<ClassDescriptor>, index: usize) -> Self {
        debug_assert!(index < class.public_methods().len());
        Self { class, index }
    }

    pub fn class(&self) -> &Arc<ClassDescriptor> {
        &self.class
    }

    /// Position in [`ClassDescriptor::public_methods`].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn method(&self) -> &MethodDescriptor {
        &self.class.public_methods()[self.index]
    }
}

/// A constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedParameter {
    constructor: ResolvedMethod,
    position: usize,
}

impl ResolvedParameter {
    pub(crate) fn new(constructor: ResolvedMethod, position: usize) -> Self {
        debug_assert!(position < constructor.method().parameter_names.len());
        Self {
            constructor,
            position,
        }
    }

    pub fn constructor(&self) -> &ResolvedMethod {
        &self.constructor
    }

    /// Position of the parameter in the constructor's signature.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.constructor.method().parameter_names[self.position]
    }
}

/// Outcome of resolving one reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Class(Arc<ClassDescriptor>),
    Method(ResolvedMethod),
    Parameter(ResolvedParameter),
    Bean(BeanDeclaration<'a>),
    /// A bean reached through an alias.
    Alias {
        alias: AliasDeclaration<'a>,
        bean: BeanDeclaration<'a>,
    },
    /// Nothing resolved. This is the normal outcome for incomplete documents.
    Absent,
}

impl<'a> Resolution<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The bean this resolution points at, directly or through an alias.
    pub fn bean(&self) -> Option<BeanDeclaration<'a>> {
        match self {
            Self::Bean(bean) | Self::Alias { bean, .. } => Some(*bean),
            _ => None,
        }
    }

    /// The method, for method resolutions.
    pub fn method(&self) -> Option<&MethodDescriptor> {
        match self {
            Self::Method(resolved) => Some(resolved.method()),
            _ => None,
        }
    }
}

impl<'a> From<Option<Resolution<'a>>> for Resolution<'a> {
    fn from(value: Option<Resolution<'a>>) -> Self {
        value.unwrap_or(Resolution::Absent)
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves references against a registry and a type provider.
///
/// Holds no state of its own; every call is a pure read of the registry and
/// the provider, so repeated calls give identical results.
#[derive(Clone, Copy)]
pub struct BeanResolver<'a> {
    pub(super) registry: &'a BeanRegistry<'a>,
    pub(super) types: &'a dyn TypeProvider,
}

impl<'a> BeanResolver<'a> {
    pub fn new(registry: &'a BeanRegistry<'a>, types: &'a dyn TypeProvider) -> Self {
        Self { registry, types }
    }

    pub fn registry(&self) -> &'a BeanRegistry<'a> {
        self.registry
    }

    pub fn types(&self) -> &'a dyn TypeProvider {
        self.types
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.registry.config()
    }

    /// Resolve a property name (`name`, `name-ref`) to its mutator.
    pub fn resolve_setter(&self, bean: BeanDeclaration<'_>, property: &str) -> Resolution<'a> {
        let base = strip_reference_suffix(property);
        if base.is_empty() {
            return Resolution::Absent;
        }
        let accessor = to_accessor_name(base);
        self.find_method(bean, None, MethodFilter::SETTER_TARGET, &accessor)
            .into()
    }

    /// Resolve an `init-method`, `destroy-method` or `factory-method` value.
    pub fn resolve_method(
        &self,
        bean: BeanDeclaration<'_>,
        kind: ReferenceKind,
        name: &str,
    ) -> Resolution<'a> {
        if !kind.is_method_name() {
            return Resolution::Absent;
        }
        let filter = kind.resolution_filter().unwrap_or(MethodFilter::METHOD);
        let context = (kind == ReferenceKind::FactoryMethod)
            .then(|| ReferenceSite::value(bean.node(), FACTORY_METHOD));
        self.find_method(bean, context.as_ref(), filter, name)
            .into()
    }

    /// Resolve a `constructor-arg` name to a constructor parameter.
    ///
    /// Constructors whose arity equals the number of declared arguments are
    /// searched first, then the remaining ones in table order.
    pub fn resolve_constructor_arg(&self, bean: BeanDeclaration<'_>, name: &str) -> Resolution<'a> {
        let Some(class) = self.resolve_class(bean, None) else {
            return Resolution::Absent;
        };
        let count = bean.constructor_arg_count(self.config());

        let constructors: Vec<usize> = class
            .public_methods()
            .iter()
            .enumerate()
            .filter(|(_, m)| MethodFilter::CONSTRUCTOR.matches(m))
            .map(|(index, _)| index)
            .collect();
        let (exact, rest): (Vec<usize>, Vec<usize>) = constructors
            .into_iter()
            .partition(|&index| class.public_methods()[index].parameter_count() == count);

        exact
            .into_iter()
            .chain(rest)
            .find_map(|index| {
                let position = class.public_methods()[index]
                    .parameter_names
                    .iter()
                    .position(|p| p.as_ref() == name)?;
                Some(Resolution::Parameter(ResolvedParameter::new(
                    ResolvedMethod::new(Arc::clone(&class), index),
                    position,
                )))
            })
            .into()
    }

    /// Resolve a bean id, name or alias.
    pub fn resolve_bean_reference(&self, name: &str) -> Resolution<'a> {
        let Some(found) = self
            .registry
            .lookup_reference(name, self.config().follow_alias_chains)
        else {
            return Resolution::Absent;
        };
        match found.alias {
            Some(alias) => Resolution::Alias {
                alias,
                bean: found.bean,
            },
            None => Resolution::Bean(found.bean),
        }
    }

    /// Resolve a fully qualified class name.
    pub fn resolve_class_name(&self, name: &str) -> Resolution<'a> {
        self.types
            .resolve_type(name.trim())
            .map(Resolution::Class)
            .into()
    }

    /// Classify `site` and resolve its current value.
    ///
    /// Import resources are not handled here; see `ide::goto_import`.
    pub fn resolve_site(&self, doc: &dyn DocumentTree, site: &ReferenceSite<'_>) -> Resolution<'a> {
        let config = self.config();
        let Some(kind) = ReferenceKind::classify(doc, site, config) else {
            return Resolution::Absent;
        };
        tracing::trace!("resolving {:?} at {:?}", kind, site);

        if kind == ReferenceKind::ShorthandProperty {
            return match BeanDeclaration::enclosing(doc, site.element, config) {
                Some(bean) => self.resolve_setter(bean, site.attribute),
                None => Resolution::Absent,
            };
        }

        let Some(value) = site.read(doc).map(str::trim).filter(|v| !v.is_empty()) else {
            return Resolution::Absent;
        };
        match kind {
            ReferenceKind::BeanReference => self.resolve_bean_reference(value),
            ReferenceKind::ClassName => self.resolve_class_name(value),
            ReferenceKind::ImportResource => Resolution::Absent,
            _ => {
                let Some(bean) = BeanDeclaration::enclosing(doc, site.element, config) else {
                    return Resolution::Absent;
                };
                match kind {
                    ReferenceKind::PropertyName => self.resolve_setter(bean, value),
                    ReferenceKind::ConstructorArgName => self.resolve_constructor_arg(bean, value),
                    _ => self.resolve_method(bean, kind, value),
                }
            }
        }
    }

    fn find_method(
        &self,
        bean: BeanDeclaration<'_>,
        context: Option<&ReferenceSite<'_>>,
        filter: MethodFilter,
        name: &str,
    ) -> Option<Resolution<'a>> {
        let class = self.resolve_class(bean, context)?;
        let index = class
            .public_methods()
            .iter()
            .position(|m| filter.matches(m) && m.name.as_ref() == name)?;
        Some(Resolution::Method(ResolvedMethod::new(class, index)))
    }
}
