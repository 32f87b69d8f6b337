/*
 * mod.rs
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

//! MIME header parameters: tokenizing, RFC 2231 segment assembly, RFC 2047 encoded words in
//! values, and serialization with continuation segments.

mod charset;
mod content_disposition;
mod content_type;
mod error;
mod parameter;
mod parameter_list;
mod rfc2047;
mod rfc2231;
mod segment;
mod tokenizer;
mod utils;

pub use charset::bytes_to_string;
pub use content_disposition::{parse_content_disposition, parse_content_disposition_with, ContentDisposition};
pub use content_type::{parse_content_type, parse_content_type_with, ContentType};
pub use error::ParameterParseError;
pub use parameter::Parameter;
pub use parameter_list::ParameterList;
pub use rfc2047::decode_encoded_words;
pub use rfc2231::{decode_extended_value, ExtendedPrefix};
pub use segment::{classify, Segment};
pub use tokenizer::{tokenize, RawParameter};
pub use utils::{is_token, is_token_char, quote};
