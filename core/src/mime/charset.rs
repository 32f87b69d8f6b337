/*
 * charset.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Tagliacarte, a cross-platform email client.
 *
 * Tagliacarte is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Tagliacarte is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Tagliacarte.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Decoded bytes to string for the charsets named in encoded words and extended parameters.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Charset {
    Utf8,
    /// US-ASCII, ISO-8859-1 and unknown charsets: each byte maps to the code point of the same value.
    Latin1,
}

fn lookup(charset: &str) -> Option<Charset> {
    let name = charset.trim().to_ascii_lowercase();
    match name.as_str() {
        "utf-8" | "utf8" => Some(Charset::Utf8),
        "us-ascii" | "ascii" | "iso-8859-1" | "iso_8859-1" | "iso8859-1" | "latin1" | "latin-1"
        | "l1" | "cp819" | "ibm819" => Some(Charset::Latin1),
        _ => None,
    }
}

/// Convert `bytes` to a string using `charset`. Invalid UTF-8 sequences become U+FFFD;
/// unknown charsets fall back to one character per byte.
pub fn bytes_to_string(bytes: &[u8], charset: &str) -> String {
    let cs = lookup(charset).unwrap_or_else(|| {
        debug!(charset, "unsupported charset, decoding bytes as ISO-8859-1");
        Charset::Latin1
    });
    match cs {
        Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Charset::Latin1 => latin1_to_string(bytes),
    }
}

/// One character per byte (U+0000..U+00FF). Used when no charset is declared.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_case_insensitive() {
        assert_eq!(bytes_to_string("caf\u{e9}".as_bytes(), "UTF-8"), "caf\u{e9}");
        assert_eq!(bytes_to_string("caf\u{e9}".as_bytes(), "utf8"), "caf\u{e9}");
    }

    #[test]
    fn latin1() {
        assert_eq!(bytes_to_string(&[0x63, 0x61, 0x66, 0xe9], "ISO-8859-1"), "caf\u{e9}");
    }

    #[test]
    fn invalid_utf8_replaced() {
        assert_eq!(bytes_to_string(&[b'a', 0xff, b'b'], "utf-8"), "a\u{fffd}b");
    }

    #[test]
    fn unknown_charset_is_single_byte() {
        assert_eq!(bytes_to_string(&[0x41, 0xe9], "x-unknown"), "A\u{e9}");
    }
}
