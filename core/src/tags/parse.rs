//! Parsing of raw struct tag literals into [`Tags`].

use super::escape::unquote;
use super::{Tag, TagError, Tags};

/// Parses a raw tag literal as it appears in Go source.
///
/// An empty string yields an empty list. Otherwise the first and last
/// characters are the literal's delimiters: backticks for a raw string, or
/// double quotes for an interpreted string, which is unquoted before its
/// entries are read.
///
/// A value whose closing quote is missing ends parsing: the entries read so
/// far are returned without an error.
pub fn parse_tags(raw: &str) -> Result<Tags, TagError> {
    if raw.is_empty() {
        return Ok(Tags::new());
    }

    let mut chars = raw.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(TagError::TooShort);
    }

    if raw.starts_with('"') {
        let inner = unquote(raw)?;
        return parse_entries(&inner);
    }
    parse_entries(chars.as_str())
}

/// Reads space separated `key:"value"` entries.
fn parse_entries(content: &str) -> Result<Tags, TagError> {
    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut tags = Vec::new();
    let mut pos = 0;

    loop {
        while pos < len && bytes[pos] == b' ' {
            pos += 1;
        }
        if pos == len {
            break;
        }

        // A space, a quote or a control character ends the key.
        let key_start = pos;
        while pos < len
            && bytes[pos] > b' '
            && bytes[pos] != b':'
            && bytes[pos] != b'"'
            && bytes[pos] != 0x7f
        {
            pos += 1;
        }
        if pos == key_start || pos + 1 >= len || bytes[pos] != b':' || bytes[pos + 1] != b'"' {
            return Err(TagError::Syntax(key_start));
        }
        let key = &content[key_start..pos];

        let quote_start = pos + 1;
        let mut i = quote_start + 1;
        while i < len && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= len {
            break;
        }

        let value = unquote(&content[quote_start..=i])?;
        tags.push(Tag::new(key, value));
        pos = i + 1;
    }

    Ok(Tags::from_iter(tags))
}
