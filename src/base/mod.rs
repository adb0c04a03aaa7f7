//! Foundation types for the beanref engine.
//!
//! This module provides the pieces every other layer shares:
//! - [`constants`] - Tag names, attribute names and namespace URIs
//! - [`naming`] - Property name ↔ mutator name transforms
//! - [`NameShapeError`] - The only error a naming transform can raise
//!
//! This module has NO dependencies on other beanref modules.

pub mod constants;
pub mod naming;

pub use naming::{
    NameShapeError, from_accessor_name, split_namespace_prefix, strip_reference_suffix,
    to_accessor_name,
};
