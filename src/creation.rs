use crate::htmldata::{Html, Node};
use crate::htmlvalue::{Comment, Doctype, Element, Text, Value};

/// ## Creation
///
/// These create detached nodes; use the manipulation methods such as
/// [`Html::append`] to put them in a tree.
impl Html {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new, empty document node.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document)
    }

    /// Create a new doctype node.
    pub fn new_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> Node {
        self.new_node(Value::Doctype(Doctype::new(
            name.to_string(),
            public_id.to_string(),
            system_id.to_string(),
        )))
    }

    /// Create a new element node without attributes.
    ///
    /// ```rust
    /// use h5pretty::Html;
    ///
    /// let mut html = Html::new();
    /// let p = html.new_element("p");
    /// assert!(html.is_element(p));
    /// ```
    pub fn new_element(&mut self, name: &str) -> Node {
        self.new_node(Value::Element(Element::new(name.to_string())))
    }

    /// Create a new text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// Create a new comment node.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }
}
