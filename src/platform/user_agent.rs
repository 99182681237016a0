// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Builds the user-agent string sent with every request. The string is computed once
//! per process.

use std::sync::OnceLock;

use super::PlatformInfo;
use crate::config::{ApplicationMetadata, PropertiesResource};

/// Rendered in place of a property the bundled resource does not provide.
const MISSING_PROPERTY: &str = "null";

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Get the user agent of this process, building it on first use.
///
/// The format is `<name>/<version> <runtimeVendor>/<runtimeVersion> <osName>/<osVersion>`.
#[must_use]
pub fn build_user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        let metadata = ApplicationMetadata::load(&PropertiesResource::Bundled);
        let user_agent = format_user_agent(&metadata, &PlatformInfo::detect());
        log::debug!("Built user agent: {user_agent}");
        user_agent
    })
}

#[must_use]
pub fn format_user_agent(metadata: &ApplicationMetadata, platform: &PlatformInfo) -> String {
    format!(
        "{}/{} {}/{} {}/{}",
        metadata.name.as_deref().unwrap_or(MISSING_PROPERTY),
        metadata.version.as_deref().unwrap_or(MISSING_PROPERTY),
        platform.runtime_vendor,
        platform.runtime_version,
        platform.os_name,
        platform.os_version,
    )
}
