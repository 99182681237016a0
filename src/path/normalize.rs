// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! String-level path normalization: separator collapsing and base path removal.

use super::PATH_SEPARATOR;

/// Collapse runs of the host path separator into a single separator.
#[must_use]
pub fn collapse_separators(path: &str) -> String {
    collapse_separators_with(path, PATH_SEPARATOR)
}

pub(crate) fn collapse_separators_with(path: &str, separator: char) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for c in path.chars() {
        let is_separator = c == separator;
        if !(is_separator && previous_was_separator) {
            collapsed.push(c);
        }
        previous_was_separator = is_separator;
    }
    collapsed
}

/// Strip `base_path` from `path`.
///
/// With a non-empty `base_path`, the first occurrence of `base_path` in the collapsed
/// `path` is replaced by a single separator. If it does not occur, `path` is returned
/// with only its separators collapsed. With an empty `base_path`, the last segment of
/// `path` is returned. An empty `path` yields an empty string.
///
/// # Examples
///
/// ```
/// use cli_support::path::replace_base_path;
///
/// # if cfg!(not(windows)) {
/// assert_eq!(replace_base_path("/home/user/project/src", "/home/user/project"), "/src");
/// assert_eq!(replace_base_path("a//b///c", ""), "c");
/// # }
/// ```
#[must_use]
pub fn replace_base_path(path: &str, base_path: &str) -> String {
    replace_base_path_with(path, base_path, PATH_SEPARATOR)
}

pub(crate) fn replace_base_path_with(path: &str, base_path: &str, separator: char) -> String {
    if path.is_empty() {
        return String::new();
    }
    let result = if base_path.is_empty() {
        // Trailing separators do not form a segment.
        path.rsplit(separator)
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
            .to_string()
    } else {
        collapse_separators_with(path, separator).replacen(base_path, &separator.to_string(), 1)
    };
    collapse_separators_with(&result, separator)
}
