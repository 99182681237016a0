// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Longest common path prefix of a set of path strings.

use super::PATH_SEPARATOR;

/// Find the common path prefix shared by all given paths.
///
/// Returns an empty string for an empty slice. For a single path, returns its
/// directory portion. For several paths, returns every leading segment they share,
/// each followed by a separator.
///
/// # Examples
///
/// ```
/// use cli_support::path::common_path;
///
/// # if cfg!(not(windows)) {
/// assert_eq!(common_path(&["/a/b/c"]), "/a/b");
/// assert_eq!(common_path(&["/a/b/c", "/a/b/d", "/a/x/y"]), "/a/");
/// # }
/// ```
#[must_use]
pub fn common_path<S: AsRef<str>>(paths: &[S]) -> String {
    common_path_with(paths, PATH_SEPARATOR)
}

pub(crate) fn common_path_with<S: AsRef<str>>(paths: &[S], separator: char) -> String {
    let paths: Vec<String> = paths
        .iter()
        .map(|path| to_separator(path.as_ref(), separator))
        .collect();

    match paths.as_slice() {
        [] => String::new(),
        [single] => parent(single, separator),
        [first, rest @ ..] => shared_segments(first, rest, separator),
    }
}

/// On backslash platforms, rewrite runs of `/` to a single `\`.
fn to_separator(path: &str, separator: char) -> String {
    if separator != '\\' || !path.contains('/') {
        return path.to_string();
    }
    let mut converted = String::with_capacity(path.len());
    let mut previous_was_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !previous_was_slash {
                converted.push(separator);
            }
            previous_was_slash = true;
        } else {
            converted.push(c);
            previous_was_slash = false;
        }
    }
    converted
}

/// Everything before the last separator. A separator at index 0 does not count.
fn parent(path: &str, separator: char) -> String {
    match path.rfind(separator) {
        Some(index) if index > 0 => path[..index].to_string(),
        _ => String::new(),
    }
}

/// Split on the separator, dropping trailing empty segments.
fn segments(path: &str, separator: char) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split(separator).collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}

fn shared_segments(first: &str, rest: &[String], separator: char) -> String {
    let reference = segments(first, separator);
    let others: Vec<Vec<&str>> = rest.iter().map(|path| segments(path, separator)).collect();

    let mut common = String::new();
    for (index, segment) in reference.iter().enumerate() {
        // A path without a segment at this index ends the prefix, including one that is
        // exactly `index` segments long.
        let all_matched = others.iter().all(|other| other.get(index) == Some(segment));
        if !all_matched {
            break;
        }
        common.push_str(segment);
        common.push(separator);
    }
    common
}
