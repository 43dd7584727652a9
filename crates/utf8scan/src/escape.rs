//! Rendering UTF-8 text as pure-ASCII JSON.
//!
//! Every code point below U+0080 passes through as the raw byte; every other
//! code point becomes a `\uXXXX` escape with uppercase hex digits. Code points
//! above U+FFFF become a surrogate pair, or are cut to their low 16 bits under
//! [`AstralEscape::Truncate`].
//!
//! The input is expected to have been validated first. On malformed input the
//! decoder rejects and stays rejected, so the output simply stops growing at
//! the first malformed sequence.

use alloc::string::String;

use crate::{
    decoder::Decoder,
    options::{AstralEscape, Options},
};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Escapes `text` with the default [`Options`].
///
/// ```rust
/// use utf8scan::escape_to_json;
///
/// assert_eq!(escape_to_json("AB"), "AB");
/// assert_eq!(escape_to_json("{\"k\":\"\u{e9}\"}"), "{\"k\":\"\\u00E9\"}");
/// assert_eq!(escape_to_json("\u{1D11E}"), "\\uD834\\uDD1E");
/// ```
#[must_use]
pub fn escape_to_json(text: &str) -> String {
    escape_bytes_to_json(text.as_bytes(), &Options::default())
}

/// Escapes UTF-8 `bytes` under `options`.
#[must_use]
pub fn escape_bytes_to_json(bytes: &[u8], options: &Options) -> String {
    let bytes = options.effective(bytes);
    let mut out = String::with_capacity(bytes.len());
    let mut decoder = Decoder::new();

    for &byte in bytes {
        let Some(codepoint) = decoder.feed(byte) else {
            continue;
        };
        match u8::try_from(codepoint) {
            Ok(ascii) if ascii < 0x80 => push_ascii(&mut out, ascii, options.escape_json_specials),
            _ => push_non_ascii(&mut out, codepoint, options.astral),
        }
    }

    out
}

fn push_ascii(out: &mut String, byte: u8, escape_specials: bool) {
    if !escape_specials {
        out.push(char::from(byte));
        return;
    }
    match byte {
        b'"' => out.push_str("\\\""),
        b'\\' => out.push_str("\\\\"),
        0x08 => out.push_str("\\b"),
        0x0C => out.push_str("\\f"),
        b'\n' => out.push_str("\\n"),
        b'\r' => out.push_str("\\r"),
        b'\t' => out.push_str("\\t"),
        0x00..=0x1F => push_unit(out, u16::from(byte)),
        _ => out.push(char::from(byte)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn push_non_ascii(out: &mut String, codepoint: u32, astral: AstralEscape) {
    if codepoint <= 0xFFFF {
        push_unit(out, codepoint as u16);
        return;
    }
    match astral {
        AstralEscape::SurrogatePair => {
            let offset = codepoint - 0x1_0000;
            push_unit(out, 0xD800 | (offset >> 10) as u16);
            push_unit(out, 0xDC00 | (offset & 0x3FF) as u16);
        }
        AstralEscape::Truncate => push_unit(out, codepoint as u16),
    }
}

/// Appends `\u` and four uppercase hex digits.
fn push_unit(out: &mut String, unit: u16) {
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        out.push(char::from(HEX_DIGITS[usize::from((unit >> shift) & 0xF)]));
    }
}
