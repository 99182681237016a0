// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Support helpers for a file-synchronisation command-line client.
//!
//! This crate provides functionality to:
//! - Read the application name, version and base URL from bundled properties
//! - Build the user-agent string sent with requests
//! - Normalize path strings and compute the common prefix of a set of paths
//! - Query the host platform and environment

pub mod config;
pub mod messages;
pub mod path;
pub mod platform;
pub mod report;

// Re-export key functions for convenience
pub use config::{app_name, app_version, base_url, read_properties, ApplicationMetadata};
pub use path::{common_path, replace_base_path, SourceFiles};
pub use platform::{build_user_agent, environment_variable, is_windows};
pub use report::InfoReport;
