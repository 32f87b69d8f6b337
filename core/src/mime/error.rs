/*
 * error.rs
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

//! Parameter list parse errors. Only the grammar of the list itself can fail; malformed
//! values are decoded leniently and never produce an error.

use thiserror::Error;

/// Structural failure in a parameter list. Offsets are byte offsets into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterParseError {
    #[error("unterminated quoted string starting at offset {offset}")]
    UnterminatedQuotedString { offset: usize },

    #[error("expected '=' after parameter name {name:?} at offset {offset}")]
    ExpectedEquals { name: String, offset: usize },

    #[error("invalid parameter name {name:?} at offset {offset}")]
    InvalidName { name: String, offset: usize },
}

impl ParameterParseError {
    /// Byte offset in the input where the problem was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnterminatedQuotedString { offset }
            | Self::ExpectedEquals { offset, .. }
            | Self::InvalidName { offset, .. } => *offset,
        }
    }
}
