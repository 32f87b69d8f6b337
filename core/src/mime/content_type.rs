/*
 * content_type.rs
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

//! Content-Type header (RFC 2045).

use std::fmt;

use tracing::debug;

use crate::config::ParseOptions;

use super::parameter_list::ParameterList;
use super::utils::is_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    primary_type: String,
    sub_type: String,
    parameters: ParameterList,
}

impl ContentType {
    pub fn new(primary_type: impl Into<String>, sub_type: impl Into<String>, parameters: ParameterList) -> Self {
        Self {
            primary_type: primary_type.into(),
            sub_type: sub_type.into(),
            parameters,
        }
    }

    pub fn get_primary_type(&self) -> &str {
        &self.primary_type
    }

    pub fn get_sub_type(&self) -> &str {
        &self.sub_type
    }

    pub fn is_primary_type(&self, t: &str) -> bool {
        self.primary_type.eq_ignore_ascii_case(t)
    }

    pub fn is_sub_type(&self, t: &str) -> bool {
        self.sub_type.eq_ignore_ascii_case(t)
    }

    pub fn is_mime_type(&self, primary: &str, sub: &str) -> bool {
        self.is_primary_type(primary) && self.is_sub_type(sub)
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterList {
        &mut self.parameters
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.primary_type, self.sub_type, self.parameters)
    }
}

/// Split `value` at the first `;` into (primary, parameters).
pub(crate) fn split_primary(value: &str) -> (&str, &str) {
    match value.split_once(';') {
        Some((primary, params)) => (primary.trim(), params),
        None => (value.trim(), ""),
    }
}

/// Parse Content-Type header value.
pub fn parse_content_type(value: &str) -> Option<ContentType> {
    parse_content_type_with(value, &ParseOptions::default())
}

pub fn parse_content_type_with(value: &str, options: &ParseOptions) -> Option<ContentType> {
    let (type_part, params_part) = split_primary(value);
    let (primary, sub) = type_part.split_once('/')?;
    let (primary, sub) = (primary.trim(), sub.trim());
    if !is_token(primary) || !is_token(sub) {
        return None;
    }
    match ParameterList::parse_with(params_part, options) {
        Ok(parameters) => Some(ContentType::new(primary, sub, parameters)),
        Err(e) => {
            debug!(error = %e, "invalid Content-Type parameters");
            None
        }
    }
}
