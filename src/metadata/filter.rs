//! Declarative method filters.
//!
//! Every reference kind maps to a [`MethodFilter`] value instead of composing
//! predicates at each call site. See `ReferenceKind::resolution_filter` and
//! `ReferenceKind::completion_filter`.

use super::descriptor::MethodDescriptor;

/// Accepted parameter counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Any,
    Exactly(usize),
    AtMost(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::Exactly(n) => count == n,
            Arity::AtMost(n) => count <= n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// Accepted return kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnFilter {
    Any,
    /// Only `void` methods.
    Void,
    /// Anything but `void`.
    Value,
}

/// Shape a method must have to be considered for a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodFilter {
    /// Match constructors instead of ordinary methods.
    pub constructors: bool,
    /// Reject methods that are not publicly accessible.
    pub accessible_only: bool,
    pub arity: Arity,
    pub returns: ReturnFilter,
}

impl MethodFilter {
    /// Any accessible, non-constructor method.
    pub const METHOD: Self = Self {
        constructors: false,
        accessible_only: true,
        arity: Arity::Any,
        returns: ReturnFilter::Any,
    };

    /// Any accessible constructor taking at least one argument.
    pub const CONSTRUCTOR: Self = Self {
        constructors: true,
        accessible_only: true,
        arity: Arity::AtLeast(1),
        returns: ReturnFilter::Any,
    };

    /// Mutators offered by completion: one argument, `void` return.
    pub const SETTER: Self = Self {
        constructors: false,
        accessible_only: true,
        arity: Arity::Exactly(1),
        returns: ReturnFilter::Void,
    };

    /// Mutators accepted by navigation: zero or one argument, any return.
    pub const SETTER_TARGET: Self = Self {
        constructors: false,
        accessible_only: true,
        arity: Arity::AtMost(1),
        returns: ReturnFilter::Any,
    };

    /// Lifecycle callbacks: no arguments, `void` return.
    pub const LIFECYCLE: Self = Self {
        constructors: false,
        accessible_only: true,
        arity: Arity::Exactly(0),
        returns: ReturnFilter::Void,
    };

    /// Factory methods: no arguments, a value return.
    pub const FACTORY: Self = Self {
        constructors: false,
        accessible_only: true,
        arity: Arity::Exactly(0),
        returns: ReturnFilter::Value,
    };

    pub fn matches(&self, method: &MethodDescriptor) -> bool {
        if method.is_constructor != self.constructors {
            return false;
        }
        if self.accessible_only && !method.is_accessible {
            return false;
        }
        if !self.arity.accepts(method.parameter_count()) {
            return false;
        }
        match self.returns {
            ReturnFilter::Any => true,
            ReturnFilter::Void => method.return_kind.is_void(),
            ReturnFilter::Value => !method.return_kind.is_void(),
        }
    }
}
