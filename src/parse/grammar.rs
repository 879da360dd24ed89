use std::borrow::Cow;

use winnow::token::rest;
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, take_till};

/// The directive keys the scanner recognizes. Anything else parses as
/// `Unknown` and is dropped by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    UserAgent,
    Allow,
    Disallow,
    Sitemap,
    Unknown,
}

fn is_separator(c: char) -> bool {
    c == ':' || c.is_whitespace()
}

/// Split a line at its first `:` or whitespace character into a trimmed
/// `(key, value)` pair. Everything after that single separator character
/// is the value; fails if the line contains no separator at all.
pub(crate) fn key_value<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    let key = take_till(0.., is_separator).parse_next(input)?;
    let _ = any.verify(|c: &char| is_separator(*c)).parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((key.trim(), value.trim()))
}

/// Typo spellings of `disallow` seen often enough in the wild to honor.
const DISALLOW_TYPOS: &[&str] = &["dissallow", "dissalow", "disalow", "diasllow", "disallaw"];

/// Classify a directive key, case-insensitively and with tolerance for
/// frequent misspellings.
pub(crate) fn classify_key(key: &str) -> Key {
    let lower = key.to_ascii_lowercase();
    match lower.as_str() {
        "user-agent" | "useragent" | "user agent" => Key::UserAgent,
        "allow" => Key::Allow,
        "disallow" => Key::Disallow,
        "sitemap" | "site-map" => Key::Sitemap,
        _ if DISALLOW_TYPOS.contains(&lower.as_str()) => Key::Disallow,
        _ => Key::Unknown,
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn hex_pair_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
}

/// Normalize an allow/disallow pattern value: uppercase the hex digits of
/// existing percent-escapes and percent-encode bytes with the high bit
/// set. Returns the input unchanged (borrowed) when no rewrite is needed.
pub(crate) fn normalize_pattern(src: &str) -> Cow<'_, str> {
    let bytes = src.as_bytes();
    let mut needs_rewrite = false;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && hex_pair_at(bytes, i) {
            if bytes[i + 1].is_ascii_lowercase() || bytes[i + 2].is_ascii_lowercase() {
                needs_rewrite = true;
            }
            i += 3;
        } else {
            if bytes[i] & 0x80 != 0 {
                needs_rewrite = true;
            }
            i += 1;
        }
    }
    if !needs_rewrite {
        return Cow::Borrowed(src);
    }

    let mut dst = String::with_capacity(src.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' && hex_pair_at(bytes, i) {
            dst.push('%');
            dst.push(bytes[i + 1].to_ascii_uppercase() as char);
            dst.push(bytes[i + 2].to_ascii_uppercase() as char);
            i += 3;
        } else if b & 0x80 != 0 {
            dst.push('%');
            dst.push(HEX_DIGITS[usize::from(b >> 4)] as char);
            dst.push(HEX_DIGITS[usize::from(b & 0xf)] as char);
            i += 1;
        } else {
            dst.push(b as char);
            i += 1;
        }
    }
    Cow::Owned(dst)
}
