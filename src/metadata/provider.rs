//! The type provider facade.

use std::sync::Arc;

use indexmap::IndexMap;

use super::descriptor::ClassDescriptor;

/// Looks up class metadata by fully qualified name.
///
/// Implementations must be pure for the lifetime of a query: the same name
/// yields the same descriptor.
pub trait TypeProvider {
    fn resolve_type(&self, qualified_name: &str) -> Option<Arc<ClassDescriptor>>;
}

impl<T: TypeProvider + ?Sized> TypeProvider for &T {
    fn resolve_type(&self, qualified_name: &str) -> Option<Arc<ClassDescriptor>> {
        (**self).resolve_type(qualified_name)
    }
}

/// In-memory type table keyed by qualified name, in registration order.
#[derive(Clone, Debug, Default)]
pub struct StaticTypeProvider {
    types: IndexMap<Arc<str>, Arc<ClassDescriptor>>,
}

impl StaticTypeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any earlier one with the same name.
    pub fn insert(&mut self, class: ClassDescriptor) {
        self.types
            .insert(class.qualified_name.clone(), Arc::new(class));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_type(mut self, class: ClassDescriptor) -> Self {
        self.insert(class);
        self
    }

    /// Registered classes in registration order.
    pub fn types(&self) -> impl Iterator<Item = &Arc<ClassDescriptor>> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for StaticTypeProvider {
    fn resolve_type(&self, qualified_name: &str) -> Option<Arc<ClassDescriptor>> {
        self.types.get(qualified_name).cloned()
    }
}

impl FromIterator<ClassDescriptor> for StaticTypeProvider {
    fn from_iter<I: IntoIterator<Item = ClassDescriptor>>(iter: I) -> Self {
        let mut provider = Self::new();
        for class in iter {
            provider.insert(class);
        }
        provider
    }
}
