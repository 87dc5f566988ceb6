//! Go double-quoted string literal escaping.

use super::TagError;
use std::fmt::Write;

/// Quotes `value` as a Go interpreted string literal.
///
/// Backticks are written as `\x60` because the result ends up inside a raw
/// string literal, which cannot contain one.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            '`' => out.push_str("\\x60"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Unquotes a Go interpreted string literal, surrounding quotes included.
pub(crate) fn unquote(literal: &str) -> Result<String, TagError> {
    let invalid = || TagError::Escape(literal.to_string());

    let body = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(invalid)?;

    // \x and octal escapes produce raw bytes, so collect bytes and validate at the end.
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return Err(invalid()),
            '\\' => {}
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                continue;
            }
        }

        let escaped = chars.next().ok_or_else(invalid)?;
        match escaped {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => {
                let value = read_digits(&mut chars, 2, 16).ok_or_else(invalid)?;
                out.push(value as u8);
            }
            '0'..='7' => {
                let rest = read_digits(&mut chars, 2, 8).ok_or_else(invalid)?;
                let value = (escaped as u32 - '0' as u32) * 64 + rest;
                let byte = u8::try_from(value).map_err(|_| invalid())?;
                out.push(byte);
            }
            'u' | 'U' => {
                let width = if escaped == 'u' { 4 } else { 8 };
                let value = read_digits(&mut chars, width, 16).ok_or_else(invalid)?;
                let ch = char::from_u32(value).ok_or_else(invalid)?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            _ => return Err(invalid()),
        }
    }

    String::from_utf8(out).map_err(|_| invalid())
}

/// Reads exactly `count` digits in `radix`.
fn read_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value * radix + digit;
    }
    Some(value)
}
