// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Path string helpers using the host path separator.
//!
//! Paths are handled as strings rather than `Path` values, so the results match
//! what is sent to the server and printed to the user.

mod common;
mod normalize;
mod sources;

pub use common::common_path;
pub use normalize::{collapse_separators, replace_base_path};
pub use sources::{SourceFiles, SourcesError, SourcesResult};

/// Path separator of the host (`\` on Windows, `/` elsewhere).
pub const PATH_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// [`PATH_SEPARATOR`] as a string slice.
pub const PATH_SEPARATOR_STR: &str = std::path::MAIN_SEPARATOR_STR;

/// [`PATH_SEPARATOR`] escaped for use in a regular expression.
pub const PATH_SEPARATOR_REGEX: &str = if PATH_SEPARATOR == '\\' {
    r"\\"
} else {
    PATH_SEPARATOR_STR
};
