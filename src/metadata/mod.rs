//! Reflective metadata facade.
//!
//! The engine learns about classes only through [`TypeProvider`]. Hosts wire
//! it to their own type system; [`StaticTypeProvider`] is a plain in-memory
//! table for tests and for hosts that precompute metadata.

mod descriptor;
mod filter;
mod provider;

pub use descriptor::{ClassDescriptor, MethodDescriptor, ReturnKind};
pub use filter::{Arity, MethodFilter, ReturnFilter};
pub use provider::{StaticTypeProvider, TypeProvider};
