//! Arena-backed in-memory document tree.

use std::path::{Path, PathBuf};

use super::tree::{AttributeView, DocumentTree, NodeId};

#[derive(Debug, Clone)]
struct Attribute {
    local_name: String,
    namespace: String,
    value: String,
}

#[derive(Debug, Clone)]
struct Node {
    local_name: String,
    namespace: String,
    attributes: Vec<Attribute>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// An immutable element tree stored in a flat arena.
///
/// The first element created is the root. Build one with
/// [`MemoryDocument::builder`] or, with the `xml` feature, from XML text.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    location: Option<PathBuf>,
}

impl MemoryDocument {
    /// Start building a document whose elements default to `namespace`.
    pub fn builder(namespace: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(namespace)
    }

    /// Attach the on-disk location used for relative import lookups.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&Self, NodeId) -> bool) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(|index| NodeId::new(index as u32))
            .find(|node| predicate(self, *node))
    }

    /// First element whose unqualified attribute `name` equals `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.find(|doc, node| doc.attribute(node, name) == Some(value))
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }
}

impl DocumentTree for MemoryDocument {
    fn root_element(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then(|| NodeId::new(0))
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.node(element)?
            .attributes
            .iter()
            .find(|attr| attr.namespace.is_empty() && attr.local_name == name)
            .map(|attr| attr.value.as_str())
    }

    fn attributes(&self, element: NodeId) -> Vec<AttributeView<'_>> {
        self.node(element)
            .map(|node| {
                node.attributes
                    .iter()
                    .map(|attr| AttributeView {
                        local_name: &attr.local_name,
                        namespace: &attr.namespace,
                        value: &attr.value,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn children(&self, element: NodeId) -> Vec<NodeId> {
        self.node(element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.node(element)?.parent
    }

    fn local_name(&self, element: NodeId) -> &str {
        self.node(element).map_or("", |node| node.local_name.as_str())
    }

    fn namespace(&self, element: NodeId) -> &str {
        self.node(element).map_or("", |node| node.namespace.as_str())
    }

    fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }
}

/// Stack-based builder for [`MemoryDocument`].
///
/// ```
/// use beanref::syntax::{DocumentTree, MemoryDocument};
///
/// let doc = MemoryDocument::builder("")
///     .open("beans")
///     .open("bean")
///     .attr("id", "a")
///     .close()
///     .build();
///
/// let root = doc.root_element().unwrap();
/// assert_eq!(doc.children(root).len(), 1);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    namespace: String,
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
}

impl DocumentBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            nodes: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Open a child of the current element in the default namespace.
    pub fn open(self, local_name: &str) -> Self {
        let namespace = self.namespace.clone();
        self.open_ns(&namespace, local_name)
    }

    /// Open a child of the current element in an explicit namespace.
    pub fn open_ns(mut self, namespace: &str, local_name: &str) -> Self {
        self.push_element(namespace, local_name);
        self
    }

    /// Add an unqualified attribute to the current element.
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.attr_ns("", name, value)
    }

    /// Add a namespaced attribute to the current element.
    pub fn attr_ns(mut self, namespace: &str, local_name: &str, value: &str) -> Self {
        self.push_attribute(namespace, local_name, value);
        self
    }

    /// Close the current element.
    pub fn close(mut self) -> Self {
        self.stack.pop();
        self
    }

    /// Finish the document, closing any open elements.
    pub fn build(self) -> MemoryDocument {
        MemoryDocument {
            nodes: self.nodes,
            location: None,
        }
    }

    fn push_element(&mut self, namespace: &str, local_name: &str) {
        let id = NodeId::new(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(Node {
            local_name: local_name.to_string(),
            namespace: namespace.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
        });
        self.stack.push(id);
    }

    fn push_attribute(&mut self, namespace: &str, local_name: &str, value: &str) {
        if let Some(current) = self.stack.last() {
            self.nodes[current.index()].attributes.push(Attribute {
                local_name: local_name.to_string(),
                namespace: namespace.to_string(),
                value: value.to_string(),
            });
        }
    }
}
