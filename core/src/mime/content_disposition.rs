/*
 * content_disposition.rs
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

//! Content-Disposition header (RFC 2183).

use std::fmt;

use tracing::debug;

use crate::config::ParseOptions;

use super::content_type::split_primary;
use super::parameter_list::ParameterList;
use super::utils::is_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    disposition_type: String,
    parameters: ParameterList,
}

impl ContentDisposition {
    pub fn new(disposition_type: impl Into<String>, parameters: ParameterList) -> Self {
        Self {
            disposition_type: disposition_type.into(),
            parameters,
        }
    }

    pub fn get_disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn is_disposition_type(&self, t: &str) -> bool {
        self.disposition_type.eq_ignore_ascii_case(t)
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    /// The `filename` parameter, falling back to the Content-Type style `name`.
    pub fn get_filename(&self) -> Option<&str> {
        self.parameters.get("filename").or_else(|| self.parameters.get("name"))
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterList {
        &mut self.parameters
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.disposition_type, self.parameters)
    }
}

pub fn parse_content_disposition(value: &str) -> Option<ContentDisposition> {
    parse_content_disposition_with(value, &ParseOptions::default())
}

/// Parse with filename options; `windows_filenames`/`apple_filenames` apply to `filename`.
pub fn parse_content_disposition_with(value: &str, options: &ParseOptions) -> Option<ContentDisposition> {
    let (disp_part, params_part) = split_primary(value);
    if !is_token(disp_part) {
        return None;
    }
    match ParameterList::parse_with(params_part, options) {
        Ok(parameters) => Some(ContentDisposition::new(disp_part, parameters)),
        Err(e) => {
            debug!(error = %e, "invalid Content-Disposition parameters");
            None
        }
    }
}
