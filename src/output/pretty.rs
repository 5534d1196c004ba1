use std::io::{self, Write};

use super::adapter::{HtmlNode, PrettyNode};
use super::common::{Indentation, Parameters};
use crate::error::Error;
use crate::htmldata::{Html, Node};

/// Indented renderer.
///
/// Walks a tree depth first. A node that is [inline](PrettyNode::inline)
/// is written on the current line without any indentation or newlines of
/// its own; anything else gets its start, text lines, children and end on
/// separate lines, indented to depth.
///
/// The walk keeps its own stack, so deeply nested trees don't exhaust the
/// call stack. Writes go straight to the writer; wrap it in a `BufWriter` if
/// needed.
pub struct Pretty<'a, W: Write> {
    writer: W,
    indentation: &'a Indentation,
    ends_with_newline: bool,
}

// a node whose start has been written and whose children are underway
struct Open<N> {
    children: std::vec::IntoIter<N>,
    end: String,
    inline: bool,
    depth: usize,
    child_depth: usize,
    // the child being rendered is inline inside a block and owes a newline
    newline_after_child: bool,
}

impl<'a, W: Write> Pretty<'a, W> {
    /// Create a renderer writing to `writer`.
    pub fn new(writer: W, indentation: &'a Indentation) -> Self {
        Pretty {
            writer,
            indentation,
            ends_with_newline: false,
        }
    }

    /// Render `node` and its descendants at depth 0.
    pub fn render<N: PrettyNode>(&mut self, node: &N) -> io::Result<()> {
        let mut stack = vec![self.open(node, 0, node.inline())?];
        while let Some(open) = stack.last_mut() {
            if open.newline_after_child {
                open.newline_after_child = false;
                self.write("\n")?;
            }
            match open.children.next() {
                Some(child) => {
                    let inline = open.inline || child.own_inline();
                    if inline && !open.inline {
                        self.write(&self.indentation.pad(open.child_depth))?;
                        open.newline_after_child = true;
                    }
                    let depth = open.child_depth;
                    let child = self.open(&child, depth, inline)?;
                    stack.push(child);
                }
                None => {
                    if let Some(done) = stack.pop() {
                        self.close(&done)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Terminate the output with a newline if it doesn't end in one
    /// already, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if !self.ends_with_newline {
            self.write("\n")?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, s: &str) -> io::Result<()> {
        if s.is_empty() {
            return Ok(());
        }
        self.writer.write_all(s.as_bytes())?;
        self.ends_with_newline = s.ends_with('\n');
        Ok(())
    }

    // one line of markup or text: indented and terminated unless inline.
    // empty lines get no indentation.
    fn line(&mut self, depth: usize, text: &str, inline: bool) -> io::Result<()> {
        if !inline && !text.is_empty() {
            self.write(&self.indentation.pad(depth))?;
        }
        self.write(text)?;
        if !inline {
            self.write("\n")?;
        }
        Ok(())
    }

    // writes the start and text lines of `node`
    fn open<N: PrettyNode>(
        &mut self,
        node: &N,
        depth: usize,
        inline: bool,
    ) -> io::Result<Open<N>> {
        let start = node.start();
        let end = node.end();
        let lines = node.text();

        // a node without markup or text (the document) passes its depth on
        let child_depth = if start.is_empty() && end.is_empty() && lines.is_empty() {
            depth
        } else {
            depth + 1
        };

        if !start.is_empty() {
            self.line(depth, &start, inline)?;
        }
        let line_depth = if start.is_empty() { depth } else { child_depth };
        for line in &lines {
            self.line(line_depth, line, inline)?;
        }

        Ok(Open {
            children: node.children().into_iter(),
            end,
            inline,
            depth,
            child_depth,
            newline_after_child: false,
        })
    }

    fn close<N>(&mut self, open: &Open<N>) -> io::Result<()> {
        if !open.end.is_empty() {
            self.line(open.depth, &open.end, open.inline)?;
        }
        Ok(())
    }
}

/// ## Pretty printing
impl Html {
    /// The renderer's view of `node`.
    pub fn pretty_node(&self, node: Node, parameters: &Parameters) -> HtmlNode<'_> {
        HtmlNode::new(self, node, parameters.preserve_doctype)
    }

    /// Pretty print `node` to a writer.
    ///
    /// The output is terminated by a newline.
    pub fn serialize_pretty<W: Write>(
        &self,
        parameters: &Parameters,
        node: Node,
        w: W,
    ) -> Result<(), Error> {
        self.check_void_elements(node)?;
        let mut pretty = Pretty::new(w, &parameters.indentation);
        pretty.render(&self.pretty_node(node, parameters))?;
        pretty.finish()?;
        Ok(())
    }

    /// Pretty print `node` to a string.
    ///
    /// ```rust
    /// use h5pretty::{Html, output::Parameters};
    ///
    /// let mut html = Html::new();
    /// let doc = html.parse("<ul><li>a</li><li>b</li></ul>").unwrap();
    /// let ul = html.find_element(doc, "ul").unwrap();
    /// let output = html.to_pretty_string(&Parameters::default(), ul).unwrap();
    /// assert_eq!(output, "<ul>\n    <li>a</li>\n    <li>b</li>\n</ul>\n");
    /// ```
    pub fn to_pretty_string(&self, parameters: &Parameters, node: Node) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize_pretty(parameters, node, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    // the tree API refuses children for void elements, but replacing a
    // value in place can still produce one
    fn check_void_elements(&self, node: Node) -> Result<(), Error> {
        for descendant in self.descendants(node) {
            if self.is_void_element(descendant) && self.first_child(descendant).is_some() {
                let name = self
                    .element(descendant)
                    .map(|element| element.name().to_string())
                    .unwrap_or_default();
                return Err(Error::VoidElementContent(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::htmlvalue::Value;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn pretty(source: &str) -> String {
        let mut html = Html::new();
        let doc = html.parse(source).unwrap();
        html.remove_insignificant_whitespace(doc).unwrap();
        let root = html.unwrap_fragment(doc).unwrap();
        html.to_pretty_string(&Parameters::default(), root).unwrap()
    }

    #[rstest]
    #[case("<p>hi</p>", "<p>hi</p>\n")]
    #[case("<br>", "<br />\n")]
    #[case("<div></div>", "<div></div>\n")]
    #[case("hello", "hello\n")]
    #[case("", "\n")]
    #[case("<p>a &amp; b</p>", "<p>a &amp; b</p>\n")]
    #[case("<img src=\"a.png\" alt=\"\" />", "<img src=\"a.png\" alt />\n")]
    fn test_single_line(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(pretty(source), expected);
    }

    #[test]
    fn test_list() {
        assert_snapshot!(pretty("<ul><li>a</li><li>b</li></ul>"), @r###"
        <ul>
            <li>a</li>
            <li>b</li>
        </ul>
        "###);
    }

    #[test]
    fn test_nested() {
        assert_snapshot!(pretty("<div><ul><li>a</li><li><b>b</b></li></ul></div>"), @r###"
        <div>
            <ul>
                <li>a</li>
                <li>
                    <b>b</b>
                </li>
            </ul>
        </div>
        "###);
    }

    #[test]
    fn test_mixed_content() {
        assert_snapshot!(pretty("<p>Hello <em>world</em>!</p>"), @r###"
        <p>
            Hello
            <em>world</em>
            !
        </p>
        "###);
    }

    #[test]
    fn test_multiline_text() {
        assert_snapshot!(pretty("<div>\n  one\n    two\n</div>"), @r###"
        <div>
            one
            two
        </div>
        "###);
    }

    #[test]
    fn test_comment_block() {
        assert_snapshot!(pretty("<div><!-- a\nb --><p>x</p></div>"), @r###"
        <div>
            <!--
                a
                b
            -->
            <p>x</p>
        </div>
        "###);
    }

    #[test]
    fn test_comment_inline() {
        assert_eq!(pretty("<pre><!--x--></pre>"), "<pre><!--x--></pre>\n");
    }

    #[test]
    fn test_pre() {
        assert_eq!(pretty("<pre>  a\n  b</pre>"), "<pre>  a\n  b</pre>\n");
    }

    #[test]
    fn test_pre_nested_markup() {
        assert_eq!(
            pretty("<div><pre> <b>x</b>\n  y</pre></div>"),
            "<div>\n    <pre> <b>x</b>\n  y</pre>\n</div>\n"
        );
    }

    #[test]
    fn test_script_unescaped() {
        assert_eq!(
            pretty("<script>if(a<b){}</script>"),
            "<script>if(a<b){}</script>\n"
        );
    }

    #[test]
    fn test_void_in_block() {
        assert_snapshot!(pretty("<p>a<br>b</p>"), @r###"
        <p>
            a
            <br />
            b
        </p>
        "###);
    }

    #[test]
    fn test_full_document() {
        assert_snapshot!(pretty("<!DOCTYPE html><html><head><title>T</title></head><body><p>x</p></body></html>"), @r###"
        <!DOCTYPE html>
        <html>
            <head>
                <title>T</title>
            </head>
            <body>
                <p>x</p>
            </body>
        </html>
        "###);
    }

    #[test]
    fn test_tab_indentation() {
        let mut html = Html::new();
        let doc = html.parse("<ul><li>a</li></ul>").unwrap();
        let root = html.unwrap_fragment(doc).unwrap();
        let parameters = Parameters {
            indentation: Indentation::new(1, true).unwrap(),
            ..Default::default()
        };
        assert_eq!(
            html.to_pretty_string(&parameters, root).unwrap(),
            "<ul>\n\t<li>a</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_void_element_with_children_is_rejected() {
        let mut html = Html::new();
        let doc = html.new_document();
        let div = html.append_element(doc, "div").unwrap();
        html.append_text(div, "x").unwrap();
        let br = html.new_element("br");
        if let Value::Element(element) = html.value(br).clone() {
            *html.value_mut(div) = Value::Element(element);
        }
        assert!(matches!(
            html.to_pretty_string(&Parameters::default(), doc),
            Err(Error::VoidElementContent(name)) if name == "br"
        ));
    }

    #[test]
    fn test_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut html = Html::new();
        let doc = html.parse("<p>x</p>").unwrap();
        let result = html.serialize_pretty(&Parameters::default(), doc, Broken);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
