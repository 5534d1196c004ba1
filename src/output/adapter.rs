use crate::entity::escape;
use crate::htmldata::{Html, Node};
use crate::htmlvalue::{Doctype, Element, Value, ValueType};
use crate::unpretty::WHITESPACE;

/// What the renderer needs to know about a node.
///
/// Any tree can be pretty printed by implementing this trait for a handle
/// to its nodes; [`HtmlNode`] implements it for [`Html`] trees.
pub trait PrettyNode: Sized {
    /// Opening markup, or empty if the node contributes none.
    fn start(&self) -> String;
    /// Closing markup, or empty if the node contributes none.
    fn end(&self) -> String;
    /// Logical lines of text content.
    fn text(&self) -> Vec<String>;
    /// Children in order.
    fn children(&self) -> Vec<Self>;
    /// The parent, if any.
    fn parent(&self) -> Option<Self>;
    /// Whether the node is inline on its own account: a preformatted
    /// element, an element without children, or a node whose only child is
    /// a single line of text.
    fn own_inline(&self) -> bool;

    /// Whether the node is printed on one line with its surroundings. This
    /// is the case if it or any of its ancestors is
    /// [inline on its own account](PrettyNode::own_inline).
    fn inline(&self) -> bool {
        if self.own_inline() {
            return true;
        }
        let mut ancestor = self.parent();
        while let Some(node) = ancestor {
            if node.own_inline() {
                return true;
            }
            ancestor = node.parent();
        }
        false
    }
}

/// A node of an [`Html`] tree as seen by the renderer.
#[derive(Clone, Copy)]
pub struct HtmlNode<'a> {
    html: &'a Html,
    node: Node,
    preserve_doctype: bool,
    // the element no end tag can close, if the tree has one
    unclosed: Option<Node>,
}

impl<'a> HtmlNode<'a> {
    pub(crate) fn new(html: &'a Html, node: Node, preserve_doctype: bool) -> Self {
        let root = html.ancestors(node).last().unwrap_or(node);
        let unclosed = html
            .descendants(root)
            .find(|descendant| html.is_unclosed_element(*descendant));
        HtmlNode {
            html,
            node,
            preserve_doctype,
            unclosed,
        }
    }

    /// The underlying tree node.
    pub fn node(&self) -> Node {
        self.node
    }

    /// The kind of node.
    ///
    /// ```rust
    /// use h5pretty::{Html, ValueType, output::Parameters};
    ///
    /// let mut html = Html::new();
    /// let doc = html.parse("<!DOCTYPE html><p>x</p>").unwrap();
    /// let parameters = Parameters::default();
    /// assert_eq!(html.pretty_node(doc, &parameters).kind(), ValueType::Document);
    /// let doctype = html.first_child(doc).unwrap();
    /// assert_eq!(html.pretty_node(doctype, &parameters).kind(), ValueType::Doctype);
    /// ```
    pub fn kind(&self) -> ValueType {
        self.html.value_type(self.node)
    }

    fn wrap(&self, node: Node) -> Self {
        HtmlNode { node, ..*self }
    }

    // everything after an unclosed element is read back as its text, so
    // neither it nor its ancestors can have an end tag
    fn holds_unclosed(&self) -> bool {
        self.unclosed
            .map(|unclosed| self.html.ancestors(unclosed).any(|a| a == self.node))
            .unwrap_or(false)
    }

    fn element_start(&self, element: &Element) -> String {
        let mut s = format!("<{}", element.name());
        for attribute in element.attributes() {
            s.push(' ');
            s.push_str(&attribute.name);
            if !attribute.value.is_empty() {
                s.push_str("=\"");
                s.push_str(&escape(attribute.value.as_str().into()));
                s.push('"');
            }
        }
        if self.html.elements().is_void(element.name()) {
            s.push_str(" />");
        } else {
            s.push('>');
        }
        s
    }

    fn doctype_start(&self, doctype: &Doctype) -> String {
        if !self.preserve_doctype {
            return "<!DOCTYPE html>".to_string();
        }
        let mut s = "<!DOCTYPE".to_string();
        if !doctype.name().is_empty() {
            s.push(' ');
            s.push_str(doctype.name());
        }
        if !doctype.public_id().is_empty() {
            s.push_str(&format!(" PUBLIC \"{}\"", doctype.public_id()));
            if !doctype.system_id().is_empty() {
                s.push_str(&format!(" \"{}\"", doctype.system_id()));
            }
        } else if !doctype.system_id().is_empty() {
            s.push_str(&format!(" SYSTEM \"{}\"", doctype.system_id()));
        }
        s.push('>');
        s
    }

    fn escapes_text(&self) -> bool {
        if !self.html.is_text(self.node) {
            return false;
        }
        match self.html.parent_element(self.node) {
            Some(parent) => !self.html.elements().is_raw_text(
                self.html
                    .element(parent)
                    .map(|element| element.name())
                    .unwrap_or_default(),
            ),
            None => true,
        }
    }

    // the parser drops a newline right after `<pre>`, so one has to be
    // added back if the content itself starts with a newline
    fn needs_leading_newline(&self, data: &str) -> bool {
        if !data.starts_with('\n') {
            return false;
        }
        match self.html.parent(self.node) {
            Some(parent) => {
                self.html.is_preformatted_element(parent)
                    && self.html.first_child(parent) == Some(self.node)
            }
            None => false,
        }
    }
}

impl<'a> PrettyNode for HtmlNode<'a> {
    fn start(&self) -> String {
        match self.html.value(self.node) {
            Value::Element(element) => self.element_start(element),
            Value::Comment(_) => "<!--".to_string(),
            Value::Doctype(doctype) => self.doctype_start(doctype),
            Value::Document | Value::Text(_) => String::new(),
        }
    }

    fn end(&self) -> String {
        match self.html.value(self.node) {
            Value::Element(element) => {
                if self.html.elements().is_void(element.name()) || self.holds_unclosed() {
                    String::new()
                } else {
                    format!("</{}>", element.name())
                }
            }
            Value::Comment(_) => "-->".to_string(),
            Value::Document | Value::Doctype(_) | Value::Text(_) => String::new(),
        }
    }

    fn text(&self) -> Vec<String> {
        let Some(data) = self.html.data_str(self.node) else {
            return Vec::new();
        };
        let data = if self.escapes_text() {
            escape(data.into())
        } else {
            data.into()
        };
        if self.html.in_preformatted(self.node) {
            if self.needs_leading_newline(&data) {
                return vec![format!("\n{}", data)];
            }
            return vec![data.into_owned()];
        }
        let trimmed = data.trim_matches(WHITESPACE);
        if trimmed.is_empty() {
            return Vec::new();
        }
        trimmed
            .split('\n')
            .map(|line| line.trim_matches(WHITESPACE).to_string())
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        self.html
            .children(self.node)
            .map(|child| self.wrap(child))
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        self.html.parent(self.node).map(|parent| self.wrap(parent))
    }

    fn own_inline(&self) -> bool {
        if self.html.is_preformatted_element(self.node) {
            return true;
        }
        let Some(first_child) = self.html.first_child(self.node) else {
            return self.html.is_element(self.node);
        };
        // the newline that ends the output becomes part of the text of an
        // unclosed element when read back, so its text is never one line
        if self.html.is_unclosed_element(self.node) {
            return false;
        }
        if self.html.next_sibling(first_child).is_some() {
            return false;
        }
        self.html
            .text_str(first_child)
            .map(|text| !text.contains(['\r', '\n']))
            .unwrap_or(false)
    }
}
