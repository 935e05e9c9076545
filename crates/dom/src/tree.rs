//! DOM tree structure and node data.

use std::collections::HashMap;

/// Stable key for a node in a [`DomTree`].
///
/// Keys are minted by the owning tree and are never reused; a selection holds
/// keys, never node data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Build a key from its raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value behind this key.
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Data stored for each DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Data for an element node.
#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag_name: String,
    pub attributes: HashMap<String, String>,
}

impl ElementData {
    pub fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attributes: HashMap::new(),
        }
    }

    pub fn set_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// DOM tree that stores node relationships and data.
///
/// The document node is created up front and is the root of every walk.
/// Child lists are kept in insertion order, which for a parsed document is
/// document order.
pub struct DomTree {
    next_id: u64,
    root: NodeId,
    node_data: HashMap<NodeId, NodeData>,
    parents: HashMap<NodeId, NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl DomTree {
    /// Create a new tree holding only the document node.
    pub fn new() -> Self {
        let root = NodeId::from_raw(0);
        let mut node_data = HashMap::new();
        node_data.insert(root, NodeData::Document);
        Self {
            next_id: 1,
            root,
            node_data,
            parents: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn create_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        self.node_data.insert(id, data);
        id
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag_name: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Element(ElementData::new(tag_name.into())))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Comment(text.into()))
    }

    /// Set an attribute on an element node; ignored for other node kinds.
    pub fn set_attribute(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(NodeData::Element(elem)) = self.node_data.get_mut(&node) {
            elem.set_attribute(name.into(), value.into());
        }
    }

    /// Establish a parent-child relationship, appending at the end of the
    /// parent's child list.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.parents.insert(child, parent);
        self.children.entry(parent).or_default().push(child);
    }

    /// Get data for a node.
    pub fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.node_data.get(&node)
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Children of a node, in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the node exists and is an element.
    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node_data.get(&node), Some(NodeData::Element(_)))
    }

    /// Tag name of an element node.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match self.node_data.get(&node) {
            Some(NodeData::Element(elem)) => Some(elem.tag_name.as_str()),
            _ => None,
        }
    }

    /// Attribute value of an element node.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.node_data.get(&node) {
            Some(NodeData::Element(elem)) => elem.attribute(name),
            _ => None,
        }
    }

    /// The node immediately after `node` in its parent's child list,
    /// regardless of node kind.
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        siblings.get(index + 1).copied()
    }

    /// The node immediately before `node` in its parent's child list.
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        siblings.get(index.checked_sub(1)?).copied()
    }

    /// Concatenated text of the node and all its descendants, in document
    /// order.
    pub fn text_content(&self, node: NodeId) -> String {
        fn collect(tree: &DomTree, current: NodeId, out: &mut String) {
            if let Some(NodeData::Text(text)) = tree.get(current) {
                out.push_str(text);
            }
            for &child in tree.children(current) {
                collect(tree, child, out);
            }
        }
        let mut result = String::new();
        collect(self, node, &mut result);
        result
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
