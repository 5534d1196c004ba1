use log::debug;

use crate::error::Error;
use crate::htmldata::{Html, Node};

/// The whitespace set used for trimming text.
pub(crate) const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

pub(crate) fn is_whitespace(text: &str) -> bool {
    text.trim_matches(WHITESPACE).is_empty()
}

/// ## Normalization
impl Html {
    /// Remove insignificant whitespace below `node`.
    ///
    /// Text nodes consisting of only spaces, tabs, carriage returns and
    /// newlines are removed, except inside a preformatted element, whose
    /// content is left alone entirely. Elements and comments are never
    /// removed. For a document, trailing whitespace of a text node that ends
    /// `<body>` is dropped as well. Running this twice has the same effect as
    /// running it once.
    ///
    /// ```rust
    /// let mut html = h5pretty::Html::new();
    /// let doc = html.parse("<div>  <span>x</span>  </div>").unwrap();
    /// html.remove_insignificant_whitespace(doc).unwrap();
    /// let div = html.find_element(doc, "div").unwrap();
    /// assert_eq!(html.child_count(div), 1);
    /// ```
    pub fn remove_insignificant_whitespace(&mut self, node: Node) -> Result<(), Error> {
        if self.in_preformatted(node) {
            return Ok(());
        }
        let mut to_remove = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            for child in self.children(current) {
                if self.is_insignificant_whitespace(child) {
                    to_remove.push(child);
                } else if !self.is_preformatted_element(child) {
                    stack.push(child);
                }
            }
        }
        debug!("removing {} whitespace-only text nodes", to_remove.len());
        for node in to_remove {
            self.remove(node)?;
        }
        if self.is_document(node) {
            self.trim_end_of_body(node);
        }
        Ok(())
    }

    // whitespace after `</html>` is parsed into the end of `<body>`, where it
    // merges with a trailing text node
    fn trim_end_of_body(&mut self, document: Node) {
        let body = self
            .children(document)
            .find(|node| self.has_name(*node, "html"))
            .and_then(|html| self.children(html).find(|node| self.has_name(*node, "body")));
        let Some(last) = body.and_then(|body| self.last_child(body)) else {
            return;
        };
        if let Some(text) = self.text_mut(last) {
            let trimmed = text.get().trim_end_matches(WHITESPACE).to_string();
            text.set(trimmed);
        }
    }

    fn has_name(&self, node: Node, name: &str) -> bool {
        self.element(node)
            .map(|element| element.name() == name)
            .unwrap_or(false)
    }

    fn is_insignificant_whitespace(&self, node: Node) -> bool {
        self.text_str(node).map(is_whitespace).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(source: &str) -> (Html, Node) {
        let mut html = Html::new();
        let doc = html.parse(source).unwrap();
        html.remove_insignificant_whitespace(doc).unwrap();
        (html, doc)
    }

    #[test]
    fn test_unpretty() {
        let (html, doc) = normalized("<div>  <p>hello <i>world</i>  </p>  </div>");
        let div = html.find_element(doc, "div").unwrap();
        assert_eq!(html.child_count(div), 1);
        let p = html.first_child(div).unwrap();
        // significant text keeps its surrounding whitespace
        assert_eq!(html.text_str(html.first_child(p).unwrap()), Some("hello "));
        // whitespace-only text after <i> goes
        assert_eq!(html.child_count(p), 2);
    }

    #[test]
    fn test_unpretty_pre() {
        let (html, doc) = normalized("<pre>   </pre><pre><b> </b>\n</pre>");
        let pres = html
            .descendants(doc)
            .filter(|n| html.is_preformatted_element(*n))
            .collect::<Vec<_>>();
        assert_eq!(html.text_str(html.first_child(pres[0]).unwrap()), Some("   "));
        assert_eq!(html.child_count(pres[1]), 2);
        let b = html.first_child(pres[1]).unwrap();
        assert_eq!(html.text_str(html.first_child(b).unwrap()), Some(" "));
    }

    #[test]
    fn test_unpretty_keeps_comments() {
        let (html, doc) = normalized("<div><!-- --> </div>");
        let div = html.find_element(doc, "div").unwrap();
        assert_eq!(html.child_count(div), 1);
        assert_eq!(html.comment_str(html.first_child(div).unwrap()), Some(" "));
    }

    #[test]
    fn test_unpretty_inside_pre_is_noop() {
        let mut html = Html::new();
        let doc = html.parse("<pre><b> </b></pre>").unwrap();
        let b = html.find_element(doc, "b").unwrap();
        html.remove_insignificant_whitespace(b).unwrap();
        assert_eq!(html.child_count(b), 1);
    }

    #[test]
    fn test_unpretty_fixed_point() {
        let (mut html, doc) = normalized("<ul>\n  <li>a</li>\n  <li> b </li>\n</ul>\n");
        let before = html.descendants(doc).count();
        html.remove_insignificant_whitespace(doc).unwrap();
        assert_eq!(html.descendants(doc).count(), before);
    }

    #[test]
    fn test_unpretty_trims_end_of_body() {
        let (html, doc) = normalized("<!--c--><html><body>a\n</body></html>\n");
        let body = html.find_element(doc, "body").unwrap();
        assert_eq!(html.child_count(body), 1);
        assert_eq!(html.text_str(html.last_child(body).unwrap()), Some("a"));
    }

    #[test]
    fn test_unpretty_keeps_leading_whitespace_at_end_of_body() {
        let (html, doc) = normalized("<p>x</p>  y  ");
        let body = html.find_element(doc, "body").unwrap();
        let text = html.last_child(body).unwrap();
        assert_eq!(html.previous_sibling(text), html.find_element(doc, "p"));
        assert_eq!(html.text_str(text), Some("  y"));
    }
}
