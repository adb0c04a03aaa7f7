//! High-level model: the bean registry and everything resolved against it.
//!
//! ## Key Types
//!
//! - [`BeanRegistry`]: read-only view of bean and alias declarations
//! - [`ReferenceKind`]: what an attribute occurrence points at
//! - [`BeanResolver`]: class inference and symbol resolution
//! - [`Resolution`]: the outcome of one resolution, `Absent` included
//!
//! ## Resolution Layers
//!
//! ```text
//! BeanRegistry              ← declarations in document order
//!     │
//!     ▼
//! resolve_class(bean)       ← class → factory-bean → parent, then factory-method
//!     │
//!     ▼
//! resolve_site(doc, site)   ← setter, method, parameter, bean or class
//! ```

mod class_resolve;
mod reference;
mod registry;
mod resolve;

pub use reference::{AttributePart, ReferenceKind, ReferenceSite};
pub use registry::{
    AliasDeclaration, BeanDeclaration, BeanMatch, BeanRegistry, ConstructorArgEntry,
    PropertyEntry, RegistryBuilder,
};
pub use resolve::{BeanResolver, Resolution, ResolvedMethod, ResolvedParameter};
