/*
 * rfc2231.rs
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

//! RFC 2231 extended parameter values: `charset'language'` prefix and `%XX` octets.

use percent_encoding::percent_decode_str;

use super::charset::{bytes_to_string, latin1_to_string};

/// The `charset'language'` prefix of the first segment of an extended parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedPrefix {
    pub charset: Option<String>,
    pub language: Option<String>,
}

/// Split `charset'language'rest` into the prefix and `rest`. Returns `None` (nothing stripped)
/// when the value does not carry two apostrophes.
pub fn split_prefix(raw: &str) -> Option<(ExtendedPrefix, &str)> {
    let first = raw.find('\'')?;
    let second = raw[first + 1..].find('\'')? + first + 1;
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    let prefix = ExtendedPrefix {
        charset: non_empty(&raw[..first]),
        language: non_empty(&raw[first + 1..second]),
    };
    Some((prefix, &raw[second + 1..]))
}

/// Percent-decode `raw` to octets. Malformed escapes (`%G1`, a trailing `%`) are kept as
/// literal text.
pub fn percent_decode_bytes(raw: &str) -> Vec<u8> {
    percent_decode_str(raw).collect()
}

/// Convert decoded octets with `charset`, one character per byte when `None`.
pub fn octets_to_string(bytes: &[u8], charset: Option<&str>) -> String {
    match charset {
        Some(cs) => bytes_to_string(bytes, cs),
        None => latin1_to_string(bytes),
    }
}

/// Percent-decode `raw` and convert the octets with `charset`.
pub fn decode_percent(raw: &str, charset: Option<&str>) -> String {
    octets_to_string(&percent_decode_bytes(raw), charset)
}

/// Decode a complete single-segment extended value such as `utf-8'en'%E2%82%AC`.
pub fn decode_extended_value(raw: &str) -> (String, ExtendedPrefix) {
    match split_prefix(raw) {
        Some((prefix, rest)) => {
            let value = decode_percent(rest, prefix.charset.as_deref());
            (value, prefix)
        }
        None => (decode_percent(raw, None), ExtendedPrefix::default()),
    }
}
