use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::{debug, trace};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::encoding::decode;
use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::htmlvalue::Attribute;

/// ## Parsing
///
/// Parsing is done by html5ever, so any input produces a tree: malformed
/// markup is repaired the way browsers repair it, and input without
/// `<html>`, `<head>` or `<body>` gets that scaffolding synthesized.
impl Html {
    /// Parse a string containing HTML into a document node.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<p>Example</p>").unwrap();
    /// let p = html.find_element(doc, "p").unwrap();
    /// assert_eq!(html.text_str(html.first_child(p).unwrap()), Some("Example"));
    /// ```
    pub fn parse(&mut self, html: &str) -> Result<Node, Error> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .one(html.as_bytes());
        let document = self.new_document();
        self.build(document, &dom.document)?;
        debug!(
            "parsed document with {} nodes",
            self.descendants(document).count()
        );
        Ok(document)
    }

    /// Parse an HTML byte stream into a document node.
    ///
    /// The character encoding is sniffed from a byte order mark or a
    /// charset declaration; it defaults to UTF-8.
    pub fn parse_bytes(&mut self, data: &[u8]) -> Result<Node, Error> {
        let text = decode(data)?;
        self.parse(&text)
    }

    /// Read all of `reader` and parse it into a document node.
    pub fn parse_read<R: Read>(&mut self, mut reader: R) -> Result<Node, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    // copies the rcdom tree below `handle` under `parent`, depth first with
    // an explicit stack so nesting depth is bounded by memory only
    fn build(&mut self, parent: Node, handle: &Handle) -> Result<(), Error> {
        let mut stack = Vec::new();
        push_children(&mut stack, parent, handle);
        while let Some((parent, handle)) = stack.pop() {
            match handle.data {
                NodeData::Document => {
                    return Err(Error::Parse("document node inside document".into()));
                }
                NodeData::Doctype {
                    ref name,
                    ref public_id,
                    ref system_id,
                } => {
                    let doctype = self.new_doctype(name, public_id, system_id);
                    self.append(parent, doctype)?;
                }
                NodeData::Text { ref contents } => {
                    self.append_text(parent, &contents.borrow())?;
                }
                NodeData::Comment { ref contents } => {
                    self.append_comment(parent, contents)?;
                }
                NodeData::Element {
                    ref name,
                    ref attrs,
                    ref template_contents,
                    ..
                } => {
                    let node = self.append_element(parent, &name.local)?;
                    if let Some(element) = self.element_mut(node) {
                        for attr in attrs.borrow().iter() {
                            let attr_name = match attr.name.prefix {
                                Some(ref prefix) => format!("{}:{}", prefix, attr.name.local),
                                None => attr.name.local.to_string(),
                            };
                            element
                                .attributes
                                .push(Attribute::new(attr_name, attr.value.to_string()));
                        }
                    }
                    push_children(&mut stack, node, &handle);
                    // template content lives in a separate fragment; we render
                    // it as ordinary children, ahead of any others
                    if let Some(contents) = template_contents.borrow().as_ref() {
                        push_children(&mut stack, node, contents);
                    }
                }
                NodeData::ProcessingInstruction { ref target, .. } => {
                    trace!("skipping processing instruction {}", target);
                }
            }
        }
        Ok(())
    }
}

// reversed, so children are popped (and appended) in order
fn push_children(stack: &mut Vec<(Node, Handle)>, parent: Node, handle: &Handle) {
    for child in handle.children.borrow().iter().rev() {
        stack.push((parent, child.clone()));
    }
}
