//! Structural document facade.
//!
//! The engine reads documents exclusively through [`DocumentTree`]. Hosts that
//! already own a parsed tree implement the trait over it; everyone else can use
//! [`MemoryDocument`], optionally filled from XML text with the `xml` feature.

mod memory;
mod tree;
#[cfg(feature = "xml")]
pub mod xml;

pub use memory::{DocumentBuilder, MemoryDocument};
pub use tree::{AttributeView, DocumentTree, NodeId, child_elements, nearest_ancestor};
