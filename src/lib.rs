//! # beanref-base
//!
//! Reference resolution and completion for bean-registry configuration
//! documents (`<beans>` XML files) against a host's reflective class metadata.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Navigation (goto-def) and completion entry points
//!   ↓
//! project   → Import resolution, search strategies, import closure
//!   ↓
//! hir       → Registry view, class inference, symbol resolution
//!   ↓
//! metadata  → Type provider facade, method descriptors, filters
//!   ↓
//! syntax    → Document tree facade, in-memory tree, XML loader
//!   ↓
//! base      → Naming transforms, vocabulary constants
//! ```
//!
//! The engine never parses or mutates documents and holds no state between
//! queries. Everything that is "not found" comes back as
//! [`Resolution::Absent`] or an empty list.

// ============================================================================
// MODULES (dependency order: base → syntax → metadata → hir → project → ide)
// ============================================================================

/// Foundation: naming transforms and the bean vocabulary
pub mod base;

/// Resolver configuration
pub mod config;

/// Structural document facade and the in-memory tree
pub mod syntax;

/// Reflective metadata facade
pub mod metadata;

/// Registry view, class inference and symbol resolution
pub mod hir;

/// Import resolution across documents
pub mod project;

/// IDE features: completion and go-to-definition
pub mod ide;

pub use base::NameShapeError;
pub use config::ResolverConfig;
pub use hir::{BeanDeclaration, BeanRegistry, BeanResolver, ReferenceKind, Resolution};
pub use metadata::{ClassDescriptor, MethodDescriptor, ReturnKind, TypeProvider};
pub use syntax::{DocumentTree, NodeId};
