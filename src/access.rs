use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::htmldata::{Html, Node};

/// Node edges.
///
/// Used by [`Html::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag. In case of the document
    /// the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. For any other values, the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl Html {
    /// Check whether a node has been removed.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let root = html.parse("<p>Example</p>").unwrap();
    /// let p = html.find_element(root, "p").unwrap();
    /// let text = html.first_child(p).unwrap();
    /// html.remove(text).unwrap();
    /// assert!(html.is_removed(text));
    /// ```
    pub fn is_removed(&self, node: Node) -> bool {
        self.arena()[node.get()].is_removed()
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if this is the document node or if the node is
    /// detached.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<p>a<b>b</b></p>").unwrap();
    /// let b = html.find_element(doc, "b").unwrap();
    /// let a = html.previous_sibling(b).unwrap();
    /// assert_eq!(html.text_str(a), Some("a"));
    /// assert_eq!(html.previous_sibling(a), None);
    /// ```
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over the children of a node, in insertion order.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let root = html.parse("<ul><li>a</li><li>b</li></ul>").unwrap();
    /// let ul = html.find_element(root, "ul").unwrap();
    /// assert_eq!(html.children(ul).count(), 2);
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Number of children of a node.
    pub fn child_count(&self, node: Node) -> usize {
        node.get().children(self.arena()).count()
    }

    /// Iterator over the ancestors of a node, starting with the node itself.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of a node in document order, starting
    /// with the node itself.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse over node edges.
    ///
    /// This can be used to see when an element starts and ends.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// Find the first element with the given name among `node` and its
    /// descendants, in document order.
    pub fn find_element(&self, node: Node, name: &str) -> Option<Node> {
        self.descendants(node).find(|descendant| {
            self.element(*descendant)
                .map(|element| element.name() == name)
                .unwrap_or(false)
        })
    }

    /// The nearest element among the ancestors of `node`, excluding the
    /// node itself.
    pub fn parent_element(&self, node: Node) -> Option<Node> {
        self.ancestors(node)
            .skip(1)
            .find(|ancestor| self.is_element(*ancestor))
    }
}
