/*
 * parameter.rs
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

//! A single decoded MIME parameter.

/// Decoded parameter: logical name (no `*N` suffix) and fully decoded value.
/// `charset` and `language` are set only for RFC 2231 extended values that declared them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
    charset: Option<String>,
    language: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            charset: None,
            language: None,
        }
    }

    pub(crate) fn with_extended(mut self, charset: Option<String>, language: Option<String>) -> Self {
        self.charset = charset;
        self.language = language;
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Charset declared by an RFC 2231 `charset'language'` prefix.
    pub fn get_charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Language tag declared by an RFC 2231 `charset'language'` prefix.
    pub fn get_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
