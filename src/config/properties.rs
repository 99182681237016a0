// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Parses flat `key=value` properties text (comments, line continuations and escapes).

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for properties operations.
pub type PropertiesResult<T> = std::result::Result<T, PropertiesError>;

/// Errors that can occur when reading or parsing properties.
#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("Failed to read properties file: {path:?}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed \\uXXXX escape on line {line}: {escape}")]
    MalformedUnicodeEscape { line: usize, escape: String },
}

/// Parsed key/value pairs. Later duplicates of a key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty set of properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties text.
    ///
    /// Lines starting with `#` or `!` are comments. A key ends at the first unescaped
    /// `=`, `:` or whitespace. A line ending in an odd number of backslashes continues
    /// on the next line.
    ///
    /// # Errors
    /// Returns an error if a `\uXXXX` escape is malformed.
    pub fn parse(content: &str) -> PropertiesResult<Self> {
        let mut entries = BTreeMap::new();
        for (line, text) in logical_lines(content) {
            let (key, value) = split_entry(&text);
            entries.insert(unescape(key, line)?, unescape(value, line)?);
        }
        Ok(Self { entries })
    }

    /// Get the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Join continued lines and drop comments and blank lines.
///
/// Each logical line is returned with the 1-based number of the line it starts on.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line.trim_start_matches(is_blank);
        if line.is_empty() || line.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = String::new();
        let mut current = line;
        while ends_with_continuation(current) {
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some((_, next)) => current = next.trim_start_matches(is_blank),
                None => {
                    current = "";
                    break;
                }
            }
        }
        logical.push_str(current);
        result.push((index + 1, logical));
    }
    result
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                value_start = i + c.len_utf8();
                break;
            }
            _ => {}
        }
    }

    let mut value = line[value_start..].trim_start_matches(is_blank);
    // "key  = value": the separator follows the whitespace that ended the key.
    if !has_separator {
        if let Some(stripped) = value.strip_prefix(['=', ':']) {
            value = stripped.trim_start_matches(is_blank);
        }
    }
    (&line[..key_end], value)
}

/// Read the four hex digits of a `\uXXXX` escape.
fn read_unicode_escape(chars: &mut std::str::Chars<'_>, line: usize) -> PropertiesResult<u32> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        if let Ok(code) = u32::from_str_radix(&digits, 16) {
            return Ok(code);
        }
    }
    Err(PropertiesError::MalformedUnicodeEscape {
        line,
        escape: format!("\\u{digits}"),
    })
}

fn unescape(raw: &str, line: usize) -> PropertiesResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_unicode_escape(&mut chars, line)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: combine with a following low surrogate escape.
                    let mut lookahead = chars.clone();
                    match (lookahead.next(), lookahead.next()) {
                        (Some('\\'), Some('u')) => {
                            let low = read_unicode_escape(&mut lookahead, line)?;
                            if (0xDC00..0xE000).contains(&low) {
                                chars = lookahead;
                                char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                            } else {
                                None
                            }
                        }
                        _ => None,
                    }
                } else {
                    char::from_u32(unit)
                };
                out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}
