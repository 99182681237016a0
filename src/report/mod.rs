// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Report struct describing the application and host, for console or JSON output.

mod console;

pub use console::{info_table, sources_table};

use serde::Serialize;

use crate::config::{ApplicationMetadata, PropertiesResource};
use crate::path::{PATH_SEPARATOR_REGEX, PATH_SEPARATOR_STR};
use crate::platform::{build_user_agent, is_windows, PlatformInfo};

#[derive(Debug, Serialize)]
pub struct InfoReport {
    resource: String,
    metadata: ApplicationMetadata,
    user_agent: &'static str,
    platform: PlatformInfo,
    windows: bool,
    path_separator: &'static str,
    path_separator_regex: &'static str,
}

impl InfoReport {
    /// Create a new report with the metadata read from `resource`.
    ///
    /// The user agent always comes from the bundled properties.
    #[must_use]
    pub fn new(resource: &PropertiesResource) -> Self {
        Self {
            resource: resource.name(),
            metadata: ApplicationMetadata::load(resource),
            user_agent: build_user_agent(),
            platform: PlatformInfo::detect(),
            windows: is_windows(),
            path_separator: PATH_SEPARATOR_STR,
            path_separator_regex: PATH_SEPARATOR_REGEX,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &ApplicationMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent
    }
}
