/*
 * config.rs
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

//! Parse and serialize options for parameter lists. These are passed explicitly to every call
//! (no process-wide switches). Both structs deserialize with per-field defaults so a host can
//! embed them in its own settings file.

use serde::{Deserialize, Serialize};

/// Longest rendered value (quotes and escapes included) emitted in one segment.
/// A folded `\tfilename*NN=` line with a 60-character value and its `;` stays within 76.
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 60;

/// Options for [`ParameterList::parse_with`](crate::mime::ParameterList::parse_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// In `filename`/`name` values treat only `\"` and `\\` as escapes, then strip the Windows
    /// directory part (everything up to the last `\` or `/`).
    pub windows_filenames: bool,
    /// Strip the directory part (everything up to the last `/`) of `filename`/`name` values.
    pub apple_filenames: bool,
}

/// Options for [`ParameterList::serialize_with`](crate::mime::ParameterList::serialize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Values whose rendered form is longer than this are split into `name*0`, `name*1`, ...
    pub max_segment_length: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
        }
    }
}
