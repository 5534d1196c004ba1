use std::borrow::Cow;

use encoding_rs::Encoding;
use log::{debug, warn};
use xhtmlchardet::detect;

use crate::error::Error;

pub(crate) fn encoding(data: &[u8]) -> Result<&'static Encoding, Error> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, None)?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    encoding_for_label(label)
}

fn encoding_for_label(label: &str) -> Result<&'static Encoding, Error> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::Parse(format!("unsupported character encoding: {}", label)))
}

/// Decode an HTML byte stream into text.
///
/// A byte order mark wins over a declared charset. Malformed sequences are
/// replaced by U+FFFD.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<str>, Error> {
    let encoding = encoding(data)?;
    let (text, used, had_errors) = encoding.decode(data);
    debug!("decoding input as {}", used.name());
    if had_errors {
        warn!(
            "input contains byte sequences that are invalid in {}; they were replaced",
            used.name()
        );
    }
    Ok(text)
}
