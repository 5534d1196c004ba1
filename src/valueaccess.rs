use crate::htmldata::{Html, Node};
use crate::htmlvalue::{Comment, Doctype, Element, Text, Value, ValueType};

/// Obtain HTML values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`](crate::htmlvalue::Value) instead.
impl Html {
    /// Access to the HTML value for this node.
    ///
    /// ```rust
    /// use h5pretty::{Html, Value};
    ///
    /// let mut html = Html::new();
    /// let doc = html.parse("<p>Example</p>").unwrap();
    /// let p = html.find_element(doc, "p").unwrap();
    ///
    /// match html.value(p) {
    ///    Value::Element(element) => {
    ///       assert_eq!(element.name(), "p");
    ///    }
    ///    _ => { }
    /// }
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Mutable access to the HTML value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// Get the [`ValueType`](crate::htmlvalue::ValueType) of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is a document node.
    pub fn is_document(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Document
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Return true if node is a comment.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<p><!--note-->x</p>").unwrap();
    /// let p = html.find_element(doc, "p").unwrap();
    /// assert!(html.is_comment(html.first_child(p).unwrap()));
    /// assert!(!html.is_comment(html.last_child(p).unwrap()));
    /// ```
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// If this node's value is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node's value is an element, return a mutable reference to it.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node's value is a doctype, return a reference to it.
    pub fn doctype(&self, node: Node) -> Option<&Doctype> {
        match self.value(node) {
            Value::Doctype(doctype) => Some(doctype),
            _ => None,
        }
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// If this node's value is text, return a mutable reference to it.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<p>before</p>").unwrap();
    /// let p = html.find_element(doc, "p").unwrap();
    /// let text = html.first_child(p).unwrap();
    /// html.text_mut(text).unwrap().set("after");
    /// assert_eq!(html.text_str(text), Some("after"));
    /// ```
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// If this node's value is text, return the text as a string slice.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|text| text.get())
    }

    /// If this node's value is a comment, return a reference to it.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        match self.value(node) {
            Value::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// If this node's value is a comment, return the text as a string slice.
    pub fn comment_str(&self, node: Node) -> Option<&str> {
        self.comment(node).map(|comment| comment.get())
    }

    /// The textual data of a text or comment node.
    pub(crate) fn data_str(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::Text(text) => Some(text.get()),
            Value::Comment(comment) => Some(comment.get()),
            _ => None,
        }
    }

    /// Is this node a void element?
    pub fn is_void_element(&self, node: Node) -> bool {
        self.element(node)
            .map(|element| self.elements.is_void(element.name()))
            .unwrap_or(false)
    }

    /// Is this node a preformatted element, such as `pre`?
    pub fn is_preformatted_element(&self, node: Node) -> bool {
        self.element(node)
            .map(|element| self.elements.is_preformatted(element.name()))
            .unwrap_or(false)
    }

    /// Is this node an element that no end tag can close, such as
    /// `plaintext`?
    pub fn is_unclosed_element(&self, node: Node) -> bool {
        self.element(node)
            .map(|element| self.elements.is_unclosed(element.name()))
            .unwrap_or(false)
    }

    /// Is this node, or any of its ancestors, a preformatted element?
    pub fn in_preformatted(&self, node: Node) -> bool {
        self.ancestors(node)
            .any(|ancestor| self.is_preformatted_element(ancestor))
    }
}
