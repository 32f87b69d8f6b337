/*
 * segment.rs
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

//! RFC 2231 segment classification and assembly.
//!
//! Raw parameters are classified by name (`name`, `name*`, `name*N`, `name*N*`), grouped by
//! base name, ordered by ordinal and decoded into one logical [`Parameter`] per group:
//! extended segments are percent-decoded with the charset declared on the leading segment,
//! plain segments are backslash-unescaped and then have RFC 2047 encoded words expanded.
//!
//! Ordering rules for malformed input:
//! - a duplicated ordinal is resolved in favour of the segment that came last;
//! - a segment with an explicit ordinal is never displaced by an unsegmented one;
//! - gaps are ignored, the remaining segments are joined in ascending order.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::ParseOptions;

use super::parameter::Parameter;
use super::rfc2047::decode_encoded_words;
use super::rfc2231::{octets_to_string, percent_decode_bytes, split_prefix, ExtendedPrefix};
use super::tokenizer::RawParameter;
use super::utils::{unescape_backslashes, unescape_windows_path};

/// One raw parameter after name classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub base_name: String,
    /// Continuation index; `None` for `name` and `name*`.
    pub ordinal: Option<u32>,
    /// Value is `charset'lang'`-prefixed and/or percent-encoded.
    pub extended: bool,
    pub raw: String,
}

impl Segment {
    fn position(&self) -> u32 {
        self.ordinal.unwrap_or(0)
    }
}

/// Classify a raw parameter name. Ordinals that do not fit in a `u32`, and names with an empty
/// base, are kept as plain parameter names.
pub fn classify(name: &str, raw: impl Into<String>) -> Segment {
    let (base_name, ordinal, extended) = split_name(name);
    Segment {
        base_name: base_name.to_string(),
        ordinal,
        extended,
        raw: raw.into(),
    }
}

fn split_name(name: &str) -> (&str, Option<u32>, bool) {
    let (stem, extended) = match name.strip_suffix('*') {
        Some(stem) => (stem, true),
        None => (name, false),
    };
    if let Some(star) = stem.rfind('*') {
        let (base, digits) = (&stem[..star], &stem[star + 1..]);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if base.is_empty() {
                return (name, None, false);
            }
            return match digits.parse::<u32>() {
                Ok(n) => (base, Some(n), extended),
                Err(_) => {
                    debug!(name, "segment ordinal out of range, treating as plain parameter");
                    (name, None, false)
                }
            };
        }
    }
    if extended && !stem.is_empty() {
        (stem, None, true)
    } else {
        (name, None, false)
    }
}

struct Group {
    name: String,
    segments: Vec<Segment>,
}

/// Group, order and decode tokenized parameters. Groups keep the order in which their base
/// name first appeared, under the spelling first seen.
pub fn assemble(raw: Vec<RawParameter>, options: &ParseOptions) -> Vec<Parameter> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for p in raw {
        let segment = classify(&p.name, p.value);
        let key = segment.base_name.to_ascii_lowercase();
        let i = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                name: segment.base_name.clone(),
                segments: Vec::new(),
            });
            groups.len() - 1
        });
        groups[i].segments.push(segment);
    }

    groups
        .into_iter()
        .map(|g| assemble_group(g, options))
        .collect()
}

fn assemble_group(group: Group, options: &ParseOptions) -> Parameter {
    let Group { name, segments } = group;
    let mut segments = order_segments(&name, segments);

    let mut prefix = ExtendedPrefix::default();
    if let Some(first) = segments.first_mut().filter(|s| s.extended) {
        if let Some((p, rest)) = split_prefix(&first.raw) {
            let rest = rest.to_string();
            prefix = p;
            first.raw = rest;
        } else {
            debug!(name = %name, "extended parameter without charset'language' prefix");
        }
    }

    let windows_path = options.windows_filenames && is_filename_parameter(&name);
    let charset = prefix.charset.as_deref();
    let mut value = String::new();
    // Consecutive extended segments are joined as octets first: a multi-byte character may
    // straddle two segments.
    let mut octets: Vec<u8> = Vec::new();
    for segment in &segments {
        if segment.extended {
            octets.extend(percent_decode_bytes(&segment.raw));
            continue;
        }
        if !octets.is_empty() {
            value.push_str(&octets_to_string(&octets, charset));
            octets.clear();
        }
        let unescaped = if windows_path {
            unescape_windows_path(&segment.raw)
        } else {
            unescape_backslashes(&segment.raw)
        };
        value.push_str(&decode_encoded_words(&unescaped));
    }
    if !octets.is_empty() {
        value.push_str(&octets_to_string(&octets, charset));
    }
    trace!(name = %name, segments = segments.len(), "assembled parameter");

    if is_filename_parameter(&name) {
        value = sanitize_filename(value, options);
    }
    Parameter::new(name, value).with_extended(prefix.charset, prefix.language)
}

/// Stable sort by ordinal, then collapse duplicates.
fn order_segments(name: &str, mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by_key(Segment::position);
    let mut ordered: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match ordered.last_mut() {
            Some(last) if last.position() == segment.position() => {
                debug!(name, ordinal = segment.position(), "duplicate parameter segment");
                if segment.ordinal.is_some() || last.ordinal.is_none() {
                    *last = segment;
                }
            }
            _ => ordered.push(segment),
        }
    }
    ordered
}

fn is_filename_parameter(name: &str) -> bool {
    name.eq_ignore_ascii_case("filename") || name.eq_ignore_ascii_case("name")
}

/// Drop the directory part of a filename according to the enabled platform options.
/// A value that would become empty is left as is.
fn sanitize_filename(value: String, options: &ParseOptions) -> String {
    let mut value = value;
    if options.windows_filenames {
        value = strip_directory(value, &['\\', '/']);
    }
    if options.apple_filenames {
        value = strip_directory(value, &['/']);
    }
    value
}

fn strip_directory(value: String, separators: &[char]) -> String {
    match value.rfind(separators) {
        Some(i) if i + 1 < value.len() => value[i + 1..].to_string(),
        _ => value,
    }
}
