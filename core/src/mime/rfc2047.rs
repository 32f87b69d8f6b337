/*
 * rfc2047.rs
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

//! RFC 2047 encoded-word decoding (e.g. =?charset?q?text?=).
//! Many mailers put encoded words inside plain parameter values although RFC 2047 forbids it;
//! we decode them there too.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use tracing::debug;

use super::charset::bytes_to_string;

/// Base64 engine for the B encoding: padding optional, trailing bits ignored.
const B_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Expand RFC 2047 encoded-words in the string. Whitespace between two adjacent encoded words
/// is dropped; any other text is copied unchanged. Malformed encoded words are left as they are.
pub fn decode_encoded_words(s: &str) -> String {
    if !s.contains("=?") {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    let mut after_word = false;

    while let Some(i) = s[pos..].find("=?") {
        let start = pos + i;
        match decode_one_encoded_word(&s[start..]) {
            Some((decoded, consumed)) => {
                let between = &s[pos..start];
                if !(after_word && is_linear_whitespace(between)) {
                    out.push_str(between);
                }
                out.push_str(&decoded);
                pos = start + consumed;
                after_word = true;
            }
            None => {
                debug!(at = start, "malformed encoded word left undecoded");
                out.push_str(&s[pos..start + 2]);
                pos = start + 2;
                after_word = false;
            }
        }
    }
    out.push_str(&s[pos..]);
    out
}

fn is_linear_whitespace(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Decode the encoded word at the start of `word` (which begins with `=?`).
/// Returns (decoded_string, bytes consumed including the closing `?=`) or None.
fn decode_one_encoded_word(word: &str) -> Option<(String, usize)> {
    let rest = word.strip_prefix("=?")?;
    let qmark = rest.find('?')?;
    let charset = &rest[..qmark];
    if charset.is_empty() || charset.bytes().any(|b| b.is_ascii_whitespace()) {
        return None;
    }
    // RFC 2231 section 5: charset*language
    let charset = charset.split('*').next().unwrap_or(charset);

    let after = &rest[qmark + 1..];
    let encoding = after.as_bytes().first()?.to_ascii_lowercase();
    if !matches!(encoding, b'b' | b'q') || after.as_bytes().get(1) != Some(&b'?') {
        return None;
    }
    let text = &after[2..];
    let end = text.find("?=")?;
    let payload = &text[..end];
    if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        return None;
    }

    let decoded_bytes = match encoding {
        b'b' => B_ENGINE.decode(payload).ok()?,
        _ => decode_q(payload.as_bytes()),
    };
    let consumed = 2 + qmark + 1 + 2 + end + 2;
    Some((bytes_to_string(&decoded_bytes, charset), consumed))
}

/// Q encoding: _ = space, =XX = octet; a stray `=` is kept.
fn decode_q(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    let mut i = 0;
    while i < payload.len() {
        match payload[i] {
            b'_' => {
                out.push(b' ');
                i += 1;
            }
            b'=' => match (payload.get(i + 1).and_then(hex_val), payload.get(i + 2).and_then(hex_val)) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'=');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

fn hex_val(&b: &u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_encoded_words_b() {
        // =?UTF-8?B?SGVsbG8=?= -> Hello
        assert_eq!(decode_encoded_words("=?UTF-8?B?SGVsbG8=?="), "Hello");
        assert_eq!(decode_encoded_words("=?UTF-8?B?SGVsbG8?="), "Hello");
    }

    #[test]
    fn decode_encoded_words_q() {
        assert_eq!(decode_encoded_words("=?UTF-8?Q?Hello_World?="), "Hello World");
        assert_eq!(decode_encoded_words("=?utf-8?q?caf=C3=A9=2Etxt?="), "caf\u{e9}.txt");
    }

    #[test]
    fn decode_encoded_words_mixed() {
        assert_eq!(decode_encoded_words("Hello =?UTF-8?B?V29ybGQ=?=!"), "Hello World!");
    }

    #[test]
    fn adjacent_words_drop_whitespace() {
        let s = "=?utf-8?Q?abc?=\n =?utf-8?Q?def=2Epdf?=";
        assert_eq!(decode_encoded_words(s), "abcdef.pdf");
        assert_eq!(decode_encoded_words("=?utf-8?Q?a?= b =?utf-8?Q?c?="), "a b c");
    }

    #[test]
    fn charset_with_language() {
        assert_eq!(decode_encoded_words("=?US-ASCII*EN?Q?Keith_Moore?="), "Keith Moore");
    }

    #[test]
    fn latin1_word() {
        assert_eq!(decode_encoded_words("=?ISO-8859-1?Q?Andr=E9?="), "Andr\u{e9}");
    }

    #[test]
    fn malformed_left_untouched() {
        assert_eq!(decode_encoded_words("=?utf-8?X?abc?="), "=?utf-8?X?abc?=");
        assert_eq!(decode_encoded_words("a=?utf-8?Q?unterminated"), "a=?utf-8?Q?unterminated");
        assert_eq!(decode_encoded_words("=??Q?abc?="), "=??Q?abc?=");
        assert_eq!(decode_encoded_words("=?utf-8?B?@@@@?="), "=?utf-8?B?@@@@?=");
    }

    #[test]
    fn stray_equals_in_q() {
        assert_eq!(decode_encoded_words("=?utf-8?Q?a=ZZb?="), "a=ZZb");
    }
}
