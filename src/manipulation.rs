use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::htmlvalue::ValueType;

/// Manipulation of the tree structure.
///
/// This maintains the HTML structure the renderer relies on:
/// - Void elements never have children.
/// - Only documents and elements have children.
/// - A document node is always the top of a tree; doctypes only appear
///   directly under a document.
impl Html {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If the child is already attached somewhere it is moved.
    ///
    /// ```rust
    /// use h5pretty::{Html, Error};
    ///
    /// let mut html = Html::new();
    /// let br = html.new_element("br");
    /// let text = html.new_text("no");
    /// assert!(matches!(html.append(br, text), Err(Error::VoidElementContent(_))));
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a text node to a parent node given text.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text_node = self.new_text(text);
        self.append(parent, text_node)?;
        Ok(text_node)
    }

    /// Append an element node to a parent node given a name.
    pub fn append_element(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        let element_node = self.new_element(name);
        self.append(parent, element_node)?;
        Ok(element_node)
    }

    /// Append a comment node to a parent node given comment text.
    pub fn append_comment(&mut self, parent: Node, comment: &str) -> Result<Node, Error> {
        let comment_node = self.new_comment(comment);
        self.append(parent, comment_node)?;
        Ok(comment_node)
    }

    /// Move all children of `from` to the end of the children of `to`,
    /// keeping their order.
    pub fn move_children(&mut self, from: Node, to: Node) -> Result<(), Error> {
        let children = self.children(from).collect::<Vec<_>>();
        for child in children {
            self.append(to, child)?;
        }
        Ok(())
    }

    /// Detach a node (and its descendants) from the tree.
    ///
    /// It now becomes a new fragment.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<ul><li>a</li><li>b</li></ul>").unwrap();
    /// let ul = html.find_element(doc, "ul").unwrap();
    /// let second = html.last_child(ul).unwrap();
    /// html.detach(second).unwrap();
    /// assert_eq!(html.child_count(ul), 1);
    /// assert_eq!(html.parent(second), None);
    /// assert!(!html.is_removed(second));
    /// ```
    pub fn detach(&mut self, node: Node) -> Result<(), Error> {
        self.remove_structure_check(node)?;
        node.get().detach(self.arena_mut());
        Ok(())
    }

    /// Remove a node (and its descendants) from the tree.
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        self.remove_structure_check(node)?;
        node.get().remove_subtree(self.arena_mut());
        Ok(())
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        match self.value_type(parent) {
            ValueType::Document => {}
            ValueType::Element => {
                if let Some(element) = self.element(parent) {
                    if self.elements.is_void(element.name()) {
                        return Err(Error::VoidElementContent(element.name().to_string()));
                    }
                }
            }
            ValueType::Doctype | ValueType::Text | ValueType::Comment => {
                return Err(Error::InvalidOperation(
                    "Cannot add children to non-element and non-document node".into(),
                ));
            }
        }
        match self.value_type(child) {
            ValueType::Document => {
                return Err(Error::InvalidOperation("Cannot move document node".into()));
            }
            ValueType::Doctype => {
                if !self.is_document(parent) {
                    return Err(Error::InvalidOperation(
                        "Cannot add doctype outside of document node".into(),
                    ));
                }
            }
            ValueType::Element | ValueType::Text | ValueType::Comment => {
                // these can exist everywhere
            }
        }
        Ok(())
    }

    fn remove_structure_check(&self, node: Node) -> Result<(), Error> {
        if self.is_document(node) {
            return Err(Error::InvalidOperation(
                "Cannot remove document node".into(),
            ));
        }
        Ok(())
    }
}
