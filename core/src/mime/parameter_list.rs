/*
 * parameter_list.rs
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

//! Ordered, case-insensitive parameter list (RFC 2045 / RFC 2231) with a folding serializer.

use std::fmt;
use std::str::FromStr;

use crate::config::{ParseOptions, SerializeOptions};

use super::error::ParameterParseError;
use super::parameter::Parameter;
use super::segment::assemble;
use super::tokenizer::tokenize;
use super::utils::{escaped_char_len, quote, quoted_len};

/// Longest header line produced by [`ParameterList::to_folded_string`].
const MAX_LINE_LENGTH: usize = 76;

/// Parameters of a structured header, in insertion order. Names are matched case-insensitively
/// and stored with the spelling they were given. Values are always fully decoded; continuation
/// segments (`name*0`, `name*1`, ...) only exist on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the parameter part of a header (e.g. `; charset=utf-8; format=flowed`).
    pub fn parse(params_part: &str) -> Result<Self, ParameterParseError> {
        Self::parse_with(params_part, &ParseOptions::default())
    }

    /// Parse with explicit options. Fails only if the list itself is malformed (unterminated
    /// quoted-string, name without `=`); undecodable values are kept as literal text.
    pub fn parse_with(params_part: &str, options: &ParseOptions) -> Result<Self, ParameterParseError> {
        let raw = tokenize(params_part)?;
        Ok(Self {
            parameters: assemble(raw, options),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.is_named(name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameter(name).map(Parameter::get_value)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Set `name` to `value`. An existing parameter of the same name (any case) is replaced in
    /// place; otherwise the parameter is appended. Long values are split only when serialized.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let parameter = Parameter::new(name, value);
        match self.position(parameter.get_name()) {
            Some(i) => self.parameters[i] = parameter,
            None => self.parameters.push(parameter),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        self.position(name).map(|i| self.parameters.remove(i))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::get_name)
    }

    /// `; name=value` for every parameter, with default options.
    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        for entry in self.entries(options) {
            out.push_str("; ");
            out.push_str(&entry);
        }
        out
    }

    /// Like [`serialize`](Self::serialize) but folded for a header line: `used` is the number
    /// of characters already on the line (header name, colon and primary value). A CRLF and tab
    /// are inserted before any entry that would run past 76 characters.
    pub fn to_folded_string(&self, used: usize) -> String {
        self.to_folded_string_with(used, &SerializeOptions::default())
    }

    pub fn to_folded_string_with(&self, used: usize, options: &SerializeOptions) -> String {
        let mut out = String::new();
        let mut column = used;
        let entries = self.entries(options);
        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.into_iter().enumerate() {
            out.push(';');
            column += 1;
            let width = entry.chars().count();
            // Room for the `;` the next entry leaves on this line.
            let trailing = usize::from(i < last);
            if column + 1 + width + trailing > MAX_LINE_LENGTH {
                out.push_str("\r\n\t");
                column = 1;
            } else {
                out.push(' ');
                column += 1;
            }
            out.push_str(&entry);
            column += width;
        }
        out
    }

    /// Rendered `name=value` entries; long values become consecutive `name*N=chunk` entries.
    fn entries(&self, options: &SerializeOptions) -> Vec<String> {
        let max = options.max_segment_length;
        let mut entries = Vec::with_capacity(self.parameters.len());
        for p in &self.parameters {
            let name = p.get_name();
            let value = p.get_value();
            if value.is_empty() || quoted_len(value) <= max {
                entries.push(format!("{}={}", name, quote(value)));
                continue;
            }
            for (i, chunk) in split_value(value, max).into_iter().enumerate() {
                entries.push(format!("{}*{}={}", name, i, quote(chunk)));
            }
        }
        entries
    }
}

/// Split `value` on character boundaries so that each chunk, quoted, stays within `max`.
/// A character that cannot fit on its own still gets a chunk.
fn split_value(value: &str, max: usize) -> Vec<&str> {
    let budget = max.saturating_sub(2).max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (i, c) in value.char_indices() {
        let w = escaped_char_len(c);
        if used + w > budget && i > start {
            chunks.push(&value[start..i]);
            start = i;
            used = 0;
        }
        used += w;
    }
    if start < value.len() {
        chunks.push(&value[start..]);
    }
    chunks
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for ParameterList {
    type Err = ParameterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
