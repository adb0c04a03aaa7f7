//! Class and method descriptors.

use std::sync::Arc;

/// What a method hands back to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// `void`.
    Void,
    /// A primitive or otherwise unresolvable value.
    Value,
    /// A class type, by fully qualified name.
    Class(Arc<str>),
}

impl ReturnKind {
    pub fn class(qualified_name: impl Into<Arc<str>>) -> Self {
        Self::Class(qualified_name.into())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// The returned class name, when the method returns a class type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }
}

/// One entry of a class's method table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: Arc<str>,
    pub is_constructor: bool,
    pub is_accessible: bool,
    pub parameter_names: Vec<Arc<str>>,
    pub return_kind: ReturnKind,
}

impl MethodDescriptor {
    /// A public, non-constructor method with no parameters.
    pub fn new(name: impl Into<Arc<str>>, return_kind: ReturnKind) -> Self {
        Self {
            name: name.into(),
            is_constructor: false,
            is_accessible: true,
            parameter_names: Vec::new(),
            return_kind,
        }
    }

    /// A public constructor with the given parameter names.
    pub fn constructor<S: Into<Arc<str>>>(
        class_name: impl Into<Arc<str>>,
        parameters: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: class_name.into(),
            is_constructor: true,
            is_accessible: true,
            parameter_names: parameters.into_iter().map(Into::into).collect(),
            return_kind: ReturnKind::Void,
        }
    }

    /// A public one-parameter `void` mutator, e.g. `setName(name)`.
    pub fn setter(name: impl Into<Arc<str>>, parameter: impl Into<Arc<str>>) -> Self {
        Self::new(name, ReturnKind::Void).with_parameters([parameter])
    }

    /// Replace the parameter list.
    pub fn with_parameters<S: Into<Arc<str>>>(
        mut self,
        parameters: impl IntoIterator<Item = S>,
    ) -> Self {
        self.parameter_names = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the method as not publicly accessible.
    pub fn private(mut self) -> Self {
        self.is_accessible = false;
        self
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }
}

/// A class and its public method table, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub qualified_name: Arc<str>,
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            methods: Vec::new(),
        }
    }

    /// Append a method to the table.
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// The method table in the order the provider reported it.
    pub fn public_methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Simple (unqualified) class name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}
