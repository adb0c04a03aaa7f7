//! The document tree trait and navigation helpers.

use std::path::Path;

/// Opaque handle of an element inside one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One attribute of an element, with its resolved namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeView<'a> {
    /// Local part of the attribute name (`name` for `p:name`).
    pub local_name: &'a str,
    /// Namespace URI, empty for unqualified attributes.
    pub namespace: &'a str,
    pub value: &'a str,
}

/// Read-only view of a parsed, immutable document snapshot.
///
/// All methods are cheap lookups; the engine calls them many times per query
/// and never mutates anything through this trait.
pub trait DocumentTree {
    /// The top-level element, if the document has one.
    fn root_element(&self) -> Option<NodeId>;

    /// Value of the unqualified attribute `name` on `element`.
    fn attribute(&self, element: NodeId, name: &str) -> Option<&str>;

    /// All attributes of `element` in document order.
    fn attributes(&self, element: NodeId) -> Vec<AttributeView<'_>>;

    /// Child elements of `element` in document order.
    fn children(&self, element: NodeId) -> Vec<NodeId>;

    /// Structural parent of `element`; `None` for the root.
    fn parent(&self, element: NodeId) -> Option<NodeId>;

    /// Local tag name of `element`.
    fn local_name(&self, element: NodeId) -> &str;

    /// Namespace URI of `element`, empty when unqualified.
    fn namespace(&self, element: NodeId) -> &str;

    /// Where the document lives on disk, when it came from a file.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Find the closest proper ancestor of `element` matching `predicate`.
pub fn nearest_ancestor(
    doc: &dyn DocumentTree,
    element: NodeId,
    mut predicate: impl FnMut(NodeId) -> bool,
) -> Option<NodeId> {
    let mut current = doc.parent(element);
    while let Some(node) = current {
        if predicate(node) {
            return Some(node);
        }
        current = doc.parent(node);
    }
    None
}

/// Child elements of `element` whose local name is `local_name`.
pub fn child_elements<'a>(
    doc: &'a dyn DocumentTree,
    element: NodeId,
    local_name: &'a str,
) -> impl Iterator<Item = NodeId> + 'a {
    doc.children(element)
        .into_iter()
        .filter(move |child| doc.local_name(*child) == local_name)
}
