use log::debug;

use crate::error::Error;
use crate::htmldata::{Html, Node};

const SCAFFOLD_NAMES: &[&str] = &["html", "head", "body"];

/// Does the source text carry an explicit `<html>`, `<head>` or `<body>`
/// start tag?
///
/// Fragment inputs don't; for those the parser synthesizes the scaffolding.
pub fn has_explicit_scaffold(source: &str) -> bool {
    let bytes = source.as_bytes();
    let mut position = 0;
    while let Some(offset) = bytes[position..].iter().position(|b| *b == b'<') {
        let start = position + offset + 1;
        position = start;
        for name in SCAFFOLD_NAMES {
            let end = start + name.len();
            if end > bytes.len() || !bytes[start..end].eq_ignore_ascii_case(name.as_bytes()) {
                continue;
            }
            // `<header>` is not `<head>`
            match bytes.get(end) {
                None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c') => return true,
                _ => {}
            }
        }
    }
    false
}

/// ## Fragments
impl Html {
    /// Unwrap synthesized scaffolding around a fragment.
    ///
    /// If `document` consists of exactly `html > (head, body)` and at most
    /// one of `head` and `body` has content, the children of the populated
    /// one (`body` if both are empty) are moved under a new document node,
    /// which is returned. Otherwise `document` is returned unchanged.
    ///
    /// Whitespace-only text between the scaffolding elements defeats the
    /// match, so run
    /// [`remove_insignificant_whitespace`](Html::remove_insignificant_whitespace)
    /// first.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<p>hi</p>").unwrap();
    /// let fragment = html.unwrap_fragment(doc).unwrap();
    /// let p = html.first_child(fragment).unwrap();
    /// assert_eq!(html.element(p).unwrap().name(), "p");
    /// ```
    pub fn unwrap_fragment(&mut self, document: Node) -> Result<Node, Error> {
        let Some(content) = self.fragment_content(document) else {
            return Ok(document);
        };
        debug!(
            "unwrapping fragment from synthesized <{}>",
            self.element(content).map(|e| e.name()).unwrap_or_default()
        );
        let fragment = self.new_document();
        self.move_children(content, fragment)?;
        Ok(fragment)
    }

    fn fragment_content(&self, document: Node) -> Option<Node> {
        if !self.is_document(document) || self.child_count(document) != 1 {
            return None;
        }
        let root = self.first_child(document)?;
        if !self.is_named(root, "html") || self.child_count(root) != 2 {
            return None;
        }
        let head = self.first_child(root)?;
        let body = self.next_sibling(head)?;
        if !self.is_named(head, "head") || !self.is_named(body, "body") {
            return None;
        }
        match (self.first_child(head), self.first_child(body)) {
            (None, _) => Some(body),
            (Some(_), None) => Some(head),
            (Some(_), Some(_)) => None,
        }
    }

    fn is_named(&self, node: Node, name: &str) -> bool {
        self.element(node)
            .map(|element| element.name() == name && element.attributes().is_empty())
            .unwrap_or(false)
    }
}
