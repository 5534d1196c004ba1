use std::io::{Read, Write};

use log::debug;

use crate::encoding::decode;
use crate::error::Error;
use crate::fragment::has_explicit_scaffold;
use crate::htmldata::{Html, Node};
use crate::output::Parameters;

/// Read HTML from `input` and write it pretty printed to `output`.
///
/// The input is consumed completely before anything is written. Whitespace
/// only text is removed outside preformatted elements, and fragment input is
/// rendered without the scaffolding the parser synthesized (unless
/// [`Parameters::unwrap_fragment`] is off).
pub fn prettify<R: Read, W: Write>(
    mut input: R,
    output: W,
    parameters: &Parameters,
) -> Result<(), Error> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    debug!("read {} bytes of input", data.len());
    let source = decode(&data)?;
    let mut html = Html::new();
    let root = prepare(&mut html, &source, parameters)?;
    html.serialize_pretty(parameters, root, output)
}

/// Pretty print an HTML string.
///
/// ```rust
/// use h5pretty::{prettify_str, output::Parameters};
///
/// let output = prettify_str("<div>  <span>x</span>  </div>", &Parameters::default()).unwrap();
/// assert_eq!(output, "<div>\n    <span>x</span>\n</div>\n");
/// ```
pub fn prettify_str(source: &str, parameters: &Parameters) -> Result<String, Error> {
    let mut html = Html::new();
    let root = prepare(&mut html, source, parameters)?;
    html.to_pretty_string(parameters, root)
}

fn prepare(html: &mut Html, source: &str, parameters: &Parameters) -> Result<Node, Error> {
    let document = html.parse(source)?;
    html.remove_insignificant_whitespace(document)?;
    if parameters.unwrap_fragment && !has_explicit_scaffold(source) {
        html.unwrap_fragment(document)
    } else {
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_reader() {
        let mut out = Vec::new();
        prettify(&b"<p>hi</p>"[..], &mut out, &Parameters::default()).unwrap();
        assert_eq!(out, b"<p>hi</p>\n");
    }

    #[test]
    fn test_explicit_scaffold_is_kept() {
        let output = prettify_str("<html><body><p>x</p></body></html>", &Parameters::default())
            .unwrap();
        assert_eq!(
            output,
            "<html>\n    <head></head>\n    <body>\n        <p>x</p>\n    </body>\n</html>\n"
        );
    }

    #[test]
    fn test_keep_scaffold() {
        let parameters = Parameters {
            unwrap_fragment: false,
            ..Default::default()
        };
        let output = prettify_str("<p>x</p>", &parameters).unwrap();
        assert_eq!(
            output,
            "<html>\n    <head></head>\n    <body>\n        <p>x</p>\n    </body>\n</html>\n"
        );
    }

    #[test]
    fn test_trailing_newline_in_input() {
        let output = prettify_str("<p>hi</p>\n", &Parameters::default()).unwrap();
        assert_eq!(output, "<p>hi</p>\n");
    }
}
