/*
 * tokenizer.rs
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

//! Split a semicolon-separated parameter list into raw (name, value) pairs.
//! Values are not decoded here: quoted-strings lose their quotes but keep their backslashes.

use tracing::debug;

use super::error::ParameterParseError;
use super::utils::is_token;

/// One `name=value` pair as it appeared in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    pub name: String,
    pub value: String,
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Tokenize `params_part` (the text after the primary value, with or without the leading `;`).
/// Folding whitespace between parameters is skipped. Unquoted values run to the next `;` so that
/// unquoted filenames with spaces and encoded words split across folded lines survive.
pub fn tokenize(params_part: &str) -> Result<Vec<RawParameter>, ParameterParseError> {
    let bytes = params_part.as_bytes();
    let len = bytes.len();
    let mut pos = 0;
    let mut parameters = Vec::new();

    loop {
        while pos < len && (bytes[pos] == b';' || is_space(bytes[pos])) {
            pos += 1;
        }
        if pos >= len {
            break;
        }

        let name_start = pos;
        while pos < len && !matches!(bytes[pos], b'=' | b';' | b'"') && !is_space(bytes[pos]) {
            pos += 1;
        }
        let name = &params_part[name_start..pos];
        if !is_token(name) {
            return Err(ParameterParseError::InvalidName {
                name: name.to_string(),
                offset: name_start,
            });
        }
        while pos < len && is_space(bytes[pos]) {
            pos += 1;
        }
        if pos >= len || bytes[pos] != b'=' {
            return Err(ParameterParseError::ExpectedEquals {
                name: name.to_string(),
                offset: pos,
            });
        }
        pos += 1;
        while pos < len && is_space(bytes[pos]) {
            pos += 1;
        }

        let value = if pos < len && bytes[pos] == b'"' {
            let open = pos;
            pos += 1;
            let value_start = pos;
            loop {
                match bytes.get(pos) {
                    None => return Err(ParameterParseError::UnterminatedQuotedString { offset: open }),
                    Some(b'\\') => pos += 2,
                    Some(b'"') => break,
                    Some(_) => pos += 1,
                }
            }
            let v = &params_part[value_start..pos];
            pos += 1;
            let junk_start = pos;
            while pos < len && bytes[pos] != b';' {
                pos += 1;
            }
            let junk = params_part[junk_start..pos].trim();
            if !junk.is_empty() {
                debug!(name, junk, "ignoring text after quoted parameter value");
            }
            v.to_string()
        } else {
            let value_start = pos;
            while pos < len && bytes[pos] != b';' {
                pos += 1;
            }
            params_part[value_start..pos].trim().to_string()
        };

        parameters.push(RawParameter {
            name: name.to_string(),
            value,
        });
    }
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(s: &str) -> Vec<(String, String)> {
        tokenize(s)
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect()
    }

    #[test]
    fn simple_and_quoted() {
        assert_eq!(
            pairs("; charset=us-ascii; name=\"a b.txt\""),
            vec![
                ("charset".to_string(), "us-ascii".to_string()),
                ("name".to_string(), "a b.txt".to_string()),
            ]
        );
    }

    #[test]
    fn quoted_keeps_backslashes() {
        let p = tokenize(r#"; filename="\a\b\"c.txt""#).unwrap();
        assert_eq!(p[0].value, r#"\a\b\"c.txt"#);
    }

    #[test]
    fn no_leading_separator_and_folding() {
        assert_eq!(
            pairs("p*0=abc;\r\n\tp*1=def"),
            vec![
                ("p*0".to_string(), "abc".to_string()),
                ("p*1".to_string(), "def".to_string()),
            ]
        );
    }

    #[test]
    fn unquoted_runs_to_semicolon() {
        let s = ";\n filename==?utf-8?Q?abc?=\n =?utf-8?Q?def?=;";
        assert_eq!(
            pairs(s),
            vec![("filename".to_string(), "=?utf-8?Q?abc?=\n =?utf-8?Q?def?=".to_string())]
        );
    }

    #[test]
    fn spaces_around_equals() {
        assert_eq!(pairs("a = b ; c= \"d\""), vec![
            ("a".to_string(), "b".to_string()),
            ("c".to_string(), "d".to_string()),
        ]);
    }

    #[test]
    fn empty_values() {
        assert_eq!(pairs("a=; b=\"\""), vec![
            ("a".to_string(), String::new()),
            ("b".to_string(), String::new()),
        ]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" ; ;\r\n").unwrap().is_empty());
    }

    #[test]
    fn junk_after_quoted_value_ignored() {
        assert_eq!(pairs("a=\"x\" junk; b=y"), vec![
            ("a".to_string(), "x".to_string()),
            ("b".to_string(), "y".to_string()),
        ]);
    }

    #[test]
    fn unterminated_quote() {
        let err = tokenize("; a=\"abc").unwrap_err();
        assert_eq!(err, ParameterParseError::UnterminatedQuotedString { offset: 4 });
        assert!(tokenize("; a=\"abc\\\"").is_err());
    }

    #[test]
    fn missing_equals() {
        let err = tokenize("; attachment").unwrap_err();
        assert!(matches!(err, ParameterParseError::ExpectedEquals { ref name, .. } if name == "attachment"));
    }

    #[test]
    fn invalid_name() {
        assert!(matches!(tokenize("; =x"), Err(ParameterParseError::InvalidName { .. })));
        assert!(matches!(tokenize("; a/b=x"), Err(ParameterParseError::InvalidName { .. })));
    }
}
