//! Property tests: pretty printing is a fixed point, keeps the tree
//! structure, keeps indentation consistent, never closes void elements and
//! leaves `<pre>` alone.

use h5pretty::output::{Indentation, Parameters};
use h5pretty::{escape, prettify_str, Html, Value};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const INLINE_NAMES: &[&str] = &["span", "b", "em", "i", "code"];
const VOID_NAMES: &[&str] = &["br", "img", "wbr"];
const ATTRIBUTE_NAMES: &[&str] = &["id", "class", "title"];
const TEXT: &str = "[a-z &<>\"' \n\t]{1,12}";
const COMMENT: &str = "[a-z \n]{0,8}";
const ATTRIBUTE_VALUE: &str = "[a-z &<\"]{0,6}";

#[derive(Debug, Clone)]
enum Content {
    Text(String),
    Comment(String),
    Void(String, Vec<(String, String)>),
    Element(String, Vec<(String, String)>, Vec<Content>),
}

impl Content {
    fn write(&self, out: &mut String) {
        match self {
            Content::Text(text) => out.push_str(&escape(text.as_str().into())),
            Content::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Content::Void(name, attributes) => write_start(out, name, attributes),
            Content::Element(name, attributes, children) => {
                write_start(out, name, attributes);
                for child in children {
                    child.write(out);
                }
                out.push_str(&format!("</{}>", name));
            }
        }
    }
}

fn write_start(out: &mut String, name: &str, attributes: &[(String, String)]) {
    out.push('<');
    out.push_str(name);
    for (attribute_name, value) in attributes {
        out.push_str(&format!(
            " {}=\"{}\"",
            attribute_name,
            escape(value.as_str().into())
        ));
    }
    out.push('>');
}

fn to_source(contents: &[Content]) -> String {
    let mut out = String::new();
    for content in contents {
        content.write(&mut out);
    }
    out
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE, 0..3)
        .prop_map(|attributes| {
            attributes
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect()
        })
}

fn arb_inline() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        4 => TEXT.prop_map(Content::Text),
        1 => COMMENT.prop_map(Content::Comment),
        1 => (prop::sample::select(VOID_NAMES), arb_attributes())
            .prop_map(|(name, attributes)| Content::Void(name.to_string(), attributes)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            prop::sample::select(INLINE_NAMES),
            arb_attributes(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, attributes, children)| {
                Content::Element(name.to_string(), attributes, children)
            })
    })
}

fn element(name: &str, attributes: Vec<(String, String)>, children: Vec<Content>) -> Content {
    Content::Element(name.to_string(), attributes, children)
}

// flow content without preformatted elements
fn arb_flow() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        3 => arb_inline(),
        2 => (arb_attributes(), prop::collection::vec(arb_inline(), 0..4))
            .prop_map(|(attributes, children)| element("p", attributes, children)),
        1 => Just(Content::Void("hr".to_string(), Vec::new())),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            (arb_attributes(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(attributes, children)| element("div", attributes, children)),
            prop::collection::vec(prop::collection::vec(inner, 0..3), 0..3).prop_map(|items| {
                element(
                    "ul",
                    Vec::new(),
                    items
                        .into_iter()
                        .map(|children| element("li", Vec::new(), children))
                        .collect(),
                )
            }),
        ]
    })
}

fn arb_pre() -> impl Strategy<Value = Content> {
    prop::collection::vec(arb_inline(), 0..4)
        .prop_map(|children| element("pre", Vec::new(), children))
}

fn arb_document() -> impl Strategy<Value = Vec<Content>> {
    prop::collection::vec(prop_oneof![4 => arb_flow(), 1 => arb_pre()], 0..4)
}

fn arb_document_without_pre() -> impl Strategy<Value = Vec<Content>> {
    prop::collection::vec(arb_flow(), 0..4)
}

fn pretty(source: &str) -> String {
    prettify_str(source, &Parameters::default()).unwrap()
}

// whitespace-insensitive text content; preformatted text is taken as is
fn content(html: &Html, node: h5pretty::Node, data: &str) -> String {
    if html.in_preformatted(node) {
        return data.to_string();
    }
    data.split('\n')
        .map(|line| line.trim_matches([' ', '\t', '\r']))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

// the normalized tree in document order
fn structure(source: &str) -> Vec<String> {
    let mut html = Html::new();
    let doc = html.parse(source).unwrap();
    html.remove_insignificant_whitespace(doc).unwrap();
    html.descendants(doc)
        .map(|node| match html.value(node) {
            Value::Document => "document".to_string(),
            Value::Doctype(doctype) => format!("doctype {}", doctype.name()),
            Value::Element(element) => format!(
                "element {} {:?}",
                element.name(),
                element
                    .attributes()
                    .iter()
                    .map(|attribute| (attribute.name.as_str(), attribute.value.as_str()))
                    .collect::<Vec<_>>()
            ),
            Value::Text(text) => format!("text {:?}", content(&html, node, text.get())),
            Value::Comment(comment) => {
                format!("comment {:?}", content(&html, node, comment.get()))
            }
        })
        .collect()
}

fn check_indentation(output: &str, unit: &str) -> Result<(), TestCaseError> {
    for line in output.lines().filter(|line| !line.is_empty()) {
        let mut rest = line;
        while let Some(stripped) = rest.strip_prefix(unit) {
            rest = stripped;
        }
        prop_assert!(
            rest.starts_with(|c: char| !c.is_whitespace()),
            "bad indentation in line {:?}",
            line
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_idempotent(contents in arb_document()) {
        let once = pretty(&to_source(&contents));
        let twice = pretty(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_structure_preserved(contents in arb_document()) {
        let source = to_source(&contents);
        let output = pretty(&source);
        prop_assert_eq!(structure(&source), structure(&output));
    }

    #[test]
    fn test_indentation(contents in arb_document_without_pre()) {
        let output = pretty(&to_source(&contents));
        check_indentation(&output, "    ")?;
    }

    #[test]
    fn test_tab_indentation(contents in arb_document_without_pre()) {
        let parameters = Parameters {
            indentation: Indentation::new(1, true).unwrap(),
            ..Default::default()
        };
        let output = prettify_str(&to_source(&contents), &parameters).unwrap();
        check_indentation(&output, "\t")?;
    }

    #[test]
    fn test_void_elements_not_closed(contents in arb_document()) {
        let output = pretty(&to_source(&contents));
        for name in VOID_NAMES.iter().chain(["hr"].iter()) {
            let end_tag = format!("</{}>", name);
            prop_assert!(!output.contains(&end_tag));
        }
    }

    #[test]
    fn test_pre_content_preserved(text in "[a-z &<>' \n\t]{0,24}") {
        prop_assume!(!text.starts_with('\n'));
        let escaped = escape(text.as_str().into()).into_owned();
        let output = pretty(&format!("<div><pre>{}</pre></div>", escaped));
        let expected = format!("<pre>{}</pre>", escaped);
        prop_assert!(output.contains(&expected), "{:?} not in {:?}", expected, output);
    }
}
