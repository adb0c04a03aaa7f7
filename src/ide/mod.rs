//! IDE features: high-level APIs for editor handlers.
//!
//! This module is the interface between the resolution model (HIR) and an
//! editor integration. Each function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor types**: Uses our own types, converted at the boundary
//! 3. **Composable**: Built on top of [`BeanResolver`](crate::hir::BeanResolver)
//!
//! ## Usage
//!
//! ```ignore
//! use beanref::hir::{BeanRegistry, BeanResolver, ReferenceSite};
//! use beanref::ide::{complete_at, goto_definition};
//!
//! let registry = BeanRegistry::new(&document);
//! let resolver = BeanResolver::new(&registry, &types);
//!
//! let target = goto_definition(&resolver, &document, &ReferenceSite::value(node, "ref"));
//! let items = complete_at(&resolver, &document, &site, "na");
//! ```

mod completion;
mod goto;

pub use completion::{CompletionItem, CompletionKind, bean_completions, complete_at, completions};
pub use goto::{goto_definition, goto_import};
