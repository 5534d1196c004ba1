use ahash::{HashSet, HashSetExt};

// Section 12.1.2, "Elements", gives this list of void elements. Void elements
// are those that can't have any contents.
const VOID_NAMES: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

// whitespace inside these is significant and is never reindented
const PREFORMATTED_NAMES: &[&str] = &["pre", "textarea"];

// the parser does not decode entities inside these, so we must not encode them
const RAW_TEXT_NAMES: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

// no end tag closes these; the rest of the input is their text
const UNCLOSED_NAMES: &[&str] = &["plaintext"];

/// A set of HTML element names, matched ASCII case-insensitively.
#[derive(Debug, Clone)]
pub struct HtmlNames {
    names: HashSet<String>,
}

impl HtmlNames {
    /// Create a set from a list of lowercase names.
    pub fn new(names: &[&str]) -> Self {
        let mut set = HashSet::new();
        for name in names {
            set.insert(name.to_ascii_lowercase());
        }
        Self { names: set }
    }

    /// Does the given tag name belong to this set?
    pub fn matches(&self, name: &str) -> bool {
        // html5ever hands us lowercase names, so try the cheap lookup first
        if self.names.contains(name) {
            return true;
        }
        if !name.bytes().any(|b| b.is_ascii_uppercase()) {
            return false;
        }
        self.names.contains(&name.to_ascii_lowercase())
    }
}

/// The element categories the renderer and the normalizer care about.
#[derive(Debug, Clone)]
pub struct Elements {
    pub(crate) void_names: HtmlNames,
    pub(crate) preformatted_names: HtmlNames,
    pub(crate) raw_text_names: HtmlNames,
    pub(crate) unclosed_names: HtmlNames,
}

impl Elements {
    pub(crate) fn new() -> Self {
        Self {
            void_names: HtmlNames::new(VOID_NAMES),
            preformatted_names: HtmlNames::new(PREFORMATTED_NAMES),
            raw_text_names: HtmlNames::new(RAW_TEXT_NAMES),
            unclosed_names: HtmlNames::new(UNCLOSED_NAMES),
        }
    }

    /// Void elements have no children and no end tag.
    pub fn is_void(&self, name: &str) -> bool {
        self.void_names.matches(name)
    }

    /// Preformatted elements keep their whitespace as is.
    pub fn is_preformatted(&self, name: &str) -> bool {
        self.preformatted_names.matches(name)
    }

    /// Text inside raw text elements is emitted without escaping.
    pub fn is_raw_text(&self, name: &str) -> bool {
        self.raw_text_names.matches(name)
    }

    /// Unclosed elements run to the end of the input and take no end tag.
    pub fn is_unclosed(&self, name: &str) -> bool {
        self.unclosed_names.matches(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("br", true)]
    #[case("BR", true)]
    #[case("img", true)]
    #[case("wbr", true)]
    #[case("command", true)]
    #[case("p", false)]
    #[case("template", false)]
    fn test_void(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(Elements::new().is_void(name), expected);
    }

    #[rstest]
    #[case("pre", true)]
    #[case("textarea", true)]
    #[case("Pre", true)]
    #[case("script", false)]
    fn test_preformatted(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(Elements::new().is_preformatted(name), expected);
    }

    #[rstest]
    #[case("script", true)]
    #[case("style", true)]
    #[case("SCRIPT", true)]
    #[case("pre", false)]
    #[case("div", false)]
    fn test_raw_text(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(Elements::new().is_raw_text(name), expected);
    }

    #[rstest]
    #[case("plaintext", true)]
    #[case("PLAINTEXT", true)]
    #[case("xmp", false)]
    fn test_unclosed(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(Elements::new().is_unclosed(name), expected);
    }
}
