use std::borrow::Cow;

/// Escape encoding for HTML text and attribute values.
///
/// Encodes `&`, `<`, `>`, `"` and `'`; anything else is passed through.
/// If nothing needs escaping the input is returned as is, without
/// allocating.
pub fn escape(content: Cow<str>) -> Cow<str> {
    if !content
        .bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''))
    {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 16);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result.into()
}
