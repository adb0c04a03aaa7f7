//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::constants::{FACTORY_METHOD, REF_SUFFIX};
use crate::base::naming::{from_accessor_name, split_namespace_prefix, to_accessor_name};
use crate::hir::{BeanDeclaration, BeanRegistry, BeanResolver, ReferenceKind, ReferenceSite};
use crate::metadata::MethodFilter;
use crate::syntax::DocumentTree;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A property name derived from a mutator.
    Property,
    /// The by-reference (`-ref`) variant of a property.
    ReferenceProperty,
    Method,
    ConstructorArg,
    BeanById,
    BeanByName,
    Alias,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Property => 10,          // Property
            CompletionKind::ReferenceProperty => 18, // Reference
            CompletionKind::Method => 2,             // Method
            CompletionKind::ConstructorArg => 6,     // Variable
            CompletionKind::BeanById => 7,           // Class
            CompletionKind::BeanByName => 7,         // Class
            CompletionKind::Alias => 18,             // Reference
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn with_optional_detail(self, detail: Option<&str>) -> Self {
        match detail {
            Some(detail) => self.with_detail(detail),
            None => self,
        }
    }
}

/// Candidates for a reference of `kind` inside `bean` matching `prefix`.
///
/// Matching is a case-sensitive prefix test. Method-derived candidates keep
/// the provider's method-table order, bean candidates keep registry order.
/// Duplicates are not removed.
///
/// # Arguments
/// * `resolver` - Registry and type provider to complete against
/// * `bean` - The bean enclosing the attribute being completed
/// * `kind` - What the attribute refers to
/// * `prefix` - Text typed so far
/// * `namespace_prefix` - Prepended to property candidates (`p:`)
pub fn completions(
    resolver: &BeanResolver<'_>,
    bean: BeanDeclaration<'_>,
    kind: ReferenceKind,
    prefix: &str,
    namespace_prefix: &str,
) -> Vec<CompletionItem> {
    match kind {
        ReferenceKind::PropertyName | ReferenceKind::ShorthandProperty => {
            setter_completions(resolver, bean, kind, prefix, namespace_prefix)
        }
        ReferenceKind::InitMethod | ReferenceKind::DestroyMethod | ReferenceKind::FactoryMethod => {
            method_completions(resolver, bean, kind, prefix)
        }
        ReferenceKind::ConstructorArgName => constructor_arg_completions(resolver, bean, prefix),
        ReferenceKind::BeanReference => bean_completions(resolver.registry(), prefix),
        ReferenceKind::ClassName | ReferenceKind::ImportResource => Vec::new(),
    }
}

/// Every bean id, bean name and alias starting with `prefix`.
pub fn bean_completions(registry: &BeanRegistry<'_>, prefix: &str) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    for bean in registry.beans() {
        let detail = bean.class_name();
        if let Some(id) = bean.id().filter(|id| id.starts_with(prefix)) {
            items.push(
                CompletionItem::new(id, CompletionKind::BeanById).with_optional_detail(detail),
            );
        }
        if let Some(name) = bean.name().filter(|name| name.starts_with(prefix)) {
            items.push(
                CompletionItem::new(name, CompletionKind::BeanByName).with_optional_detail(detail),
            );
        }
    }

    for alias in registry.aliases() {
        if let Some(name) = alias.alias().filter(|name| name.starts_with(prefix)) {
            items.push(
                CompletionItem::new(name, CompletionKind::Alias)
                    .with_optional_detail(alias.target()),
            );
        }
    }

    items
}

/// Classify `site` and complete the text typed into it.
///
/// For shorthand attributes `typed` may carry a namespace prefix (`p:na`);
/// it is split off and prepended to every candidate.
pub fn complete_at(
    resolver: &BeanResolver<'_>,
    doc: &dyn DocumentTree,
    site: &ReferenceSite<'_>,
    typed: &str,
) -> Vec<CompletionItem> {
    let config = resolver.config();
    let Some(kind) = ReferenceKind::classify(doc, site, config) else {
        return Vec::new();
    };
    if kind == ReferenceKind::BeanReference {
        return bean_completions(resolver.registry(), typed);
    }

    let Some(bean) = BeanDeclaration::enclosing(doc, site.element, config) else {
        tracing::trace!("no enclosing bean for {:?}", site);
        return Vec::new();
    };
    let (namespace_prefix, prefix) = match kind {
        ReferenceKind::ShorthandProperty => split_namespace_prefix(typed),
        _ => ("", typed),
    };
    completions(resolver, bean, kind, prefix, namespace_prefix)
}

fn setter_completions(
    resolver: &BeanResolver<'_>,
    bean: BeanDeclaration<'_>,
    kind: ReferenceKind,
    prefix: &str,
    namespace_prefix: &str,
) -> Vec<CompletionItem> {
    let Some(class) = resolver.resolve_class(bean, None) else {
        return Vec::new();
    };
    let accessor_prefix = to_accessor_name(prefix);
    let with_references = kind == ReferenceKind::ShorthandProperty;

    let mut items = Vec::new();
    for method in class.public_methods() {
        if !MethodFilter::SETTER.matches(method) || !method.name.starts_with(&accessor_prefix) {
            continue;
        }
        let Ok(property) = from_accessor_name(&method.name) else {
            continue;
        };
        let label = format!("{namespace_prefix}{property}");
        let reference = with_references.then(|| format!("{label}{REF_SUFFIX}"));

        items.push(
            CompletionItem::new(label, CompletionKind::Property).with_detail(method.name.clone()),
        );
        if let Some(reference) = reference {
            items.push(
                CompletionItem::new(reference, CompletionKind::ReferenceProperty)
                    .with_detail(method.name.clone()),
            );
        }
    }
    items
}

fn method_completions(
    resolver: &BeanResolver<'_>,
    bean: BeanDeclaration<'_>,
    kind: ReferenceKind,
    prefix: &str,
) -> Vec<CompletionItem> {
    let Some(filter) = kind.completion_filter() else {
        return Vec::new();
    };
    let context = (kind == ReferenceKind::FactoryMethod)
        .then(|| ReferenceSite::value(bean.node(), FACTORY_METHOD));
    let Some(class) = resolver.resolve_class(bean, context.as_ref()) else {
        return Vec::new();
    };

    class
        .public_methods()
        .iter()
        .filter(|m| filter.matches(m) && m.name.starts_with(prefix))
        .map(|m| {
            CompletionItem::new(m.name.clone(), CompletionKind::Method)
                .with_optional_detail(m.return_kind.class_name())
        })
        .collect()
}

fn constructor_arg_completions(
    resolver: &BeanResolver<'_>,
    bean: BeanDeclaration<'_>,
    prefix: &str,
) -> Vec<CompletionItem> {
    let Some(class) = resolver.resolve_class(bean, None) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for constructor in class
        .public_methods()
        .iter()
        .filter(|m| MethodFilter::CONSTRUCTOR.matches(m))
    {
        for parameter in &constructor.parameter_names {
            if parameter.starts_with(prefix) {
                items.push(
                    CompletionItem::new(parameter.clone(), CompletionKind::ConstructorArg)
                        .with_detail(class.simple_name()),
                );
            }
        }
    }
    items
}
