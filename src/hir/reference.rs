//! Reference kinds and attribute classification.
//!
//! Every attribute occurrence the engine understands maps to one
//! [`ReferenceKind`]. Each kind carries its own method filters, so
//! resolution and completion agree on what a valid target looks like.

use crate::base::constants::{
    ALIAS, BEAN, BEAN_REF, CLASS, CONSTRUCTOR_ARG, DESTROY_METHOD, FACTORY_BEAN, FACTORY_METHOD,
    IMPORT, INIT_METHOD, NAME, PARENT, PROPERTY, REF, REF_SUFFIX, RESOURCE, VALUE_REF,
};
use crate::config::ResolverConfig;
use crate::metadata::MethodFilter;
use crate::syntax::{DocumentTree, NodeId};

/// What a reference-bearing attribute points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `<property name="...">`, a mutator on the bean's class.
    PropertyName,
    /// The name of a shorthand attribute (`p:name`, `p:name-ref`).
    ShorthandProperty,
    /// `init-method="..."`.
    InitMethod,
    /// `destroy-method="..."`.
    DestroyMethod,
    /// `factory-method="..."`.
    FactoryMethod,
    /// `<constructor-arg name="...">`, a constructor parameter.
    ConstructorArgName,
    /// Any attribute naming another bean or alias.
    BeanReference,
    /// `<bean class="...">`.
    ClassName,
    /// `<import resource="...">`.
    ImportResource,
}

impl ReferenceKind {
    /// Filter a navigation target must pass.
    pub fn resolution_filter(self) -> Option<MethodFilter> {
        match self {
            Self::PropertyName | Self::ShorthandProperty => Some(MethodFilter::SETTER_TARGET),
            Self::InitMethod | Self::DestroyMethod | Self::FactoryMethod => {
                Some(MethodFilter::METHOD)
            }
            Self::ConstructorArgName => Some(MethodFilter::CONSTRUCTOR),
            Self::BeanReference | Self::ClassName | Self::ImportResource => None,
        }
    }

    /// Filter a completion candidate must pass.
    pub fn completion_filter(self) -> Option<MethodFilter> {
        match self {
            Self::PropertyName | Self::ShorthandProperty => Some(MethodFilter::SETTER),
            Self::InitMethod | Self::DestroyMethod => Some(MethodFilter::LIFECYCLE),
            Self::FactoryMethod => Some(MethodFilter::FACTORY),
            Self::ConstructorArgName => Some(MethodFilter::CONSTRUCTOR),
            Self::BeanReference | Self::ClassName | Self::ImportResource => None,
        }
    }

    /// Kinds whose target is a mutator derived from a property name.
    pub fn is_setter(self) -> bool {
        matches!(self, Self::PropertyName | Self::ShorthandProperty)
    }

    /// Kinds whose value names a method on the bean's class.
    pub fn is_method_name(self) -> bool {
        matches!(
            self,
            Self::InitMethod | Self::DestroyMethod | Self::FactoryMethod
        )
    }

    /// Classify an attribute occurrence, or `None` if it is not a reference.
    pub fn classify(
        doc: &dyn DocumentTree,
        site: &ReferenceSite<'_>,
        config: &ResolverConfig,
    ) -> Option<Self> {
        if config.is_p_namespace(site.namespace) {
            return match site.part {
                AttributePart::Name => Some(Self::ShorthandProperty),
                AttributePart::Value if site.attribute.ends_with(REF_SUFFIX) => {
                    Some(Self::BeanReference)
                }
                AttributePart::Value => None,
            };
        }
        if !site.namespace.is_empty() || site.part != AttributePart::Value {
            return None;
        }
        if !config.is_bean_namespace(doc.namespace(site.element)) {
            return None;
        }

        let element = doc.local_name(site.element);
        let specific = match (element, site.attribute) {
            (PROPERTY, NAME) => Some(Self::PropertyName),
            (PROPERTY, REF) => Some(Self::BeanReference),
            (CONSTRUCTOR_ARG, NAME) => Some(Self::ConstructorArgName),
            (CONSTRUCTOR_ARG, REF) => Some(Self::BeanReference),
            (BEAN, CLASS) => Some(Self::ClassName),
            (BEAN, INIT_METHOD) => Some(Self::InitMethod),
            (BEAN, DESTROY_METHOD) => Some(Self::DestroyMethod),
            (BEAN, FACTORY_METHOD) => Some(Self::FactoryMethod),
            (REF, BEAN) => Some(Self::BeanReference),
            (ALIAS, NAME) => Some(Self::BeanReference),
            (IMPORT, RESOURCE) => Some(Self::ImportResource),
            _ => None,
        };

        specific.or(match site.attribute {
            VALUE_REF | BEAN_REF | PARENT | FACTORY_BEAN => Some(Self::BeanReference),
            _ => None,
        })
    }
}

/// Which part of an attribute the cursor is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributePart {
    Name,
    Value,
}

/// One attribute occurrence inside a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceSite<'a> {
    /// The element carrying the attribute.
    pub element: NodeId,
    /// Local name of the attribute.
    pub attribute: &'a str,
    /// Namespace of the attribute, empty when unqualified.
    pub namespace: &'a str,
    pub part: AttributePart,
}

impl<'a> ReferenceSite<'a> {
    /// The value of an unqualified attribute.
    pub fn value(element: NodeId, attribute: &'a str) -> Self {
        Self {
            element,
            attribute,
            namespace: "",
            part: AttributePart::Value,
        }
    }

    /// A namespaced attribute, name or value part.
    pub fn namespaced(
        element: NodeId,
        namespace: &'a str,
        attribute: &'a str,
        part: AttributePart,
    ) -> Self {
        Self {
            element,
            attribute,
            namespace,
            part,
        }
    }

    /// Whether this site is the `factory-method` attribute of `element`.
    pub fn is_factory_method_of(&self, element: NodeId) -> bool {
        self.element == element
            && self.namespace.is_empty()
            && self.attribute == FACTORY_METHOD
    }

    /// The attribute's current value in `doc`.
    pub fn read<'d>(&self, doc: &'d dyn DocumentTree) -> Option<&'d str> {
        if self.namespace.is_empty() {
            return doc.attribute(self.element, self.attribute);
        }
        doc.attributes(self.element)
            .into_iter()
            .find(|attr| attr.namespace == self.namespace && attr.local_name == self.attribute)
            .map(|attr| attr.value)
    }
}
