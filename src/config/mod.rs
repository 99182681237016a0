// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Application metadata read from the bundled properties resource.
//!
//! Every lookup re-reads the resource. A missing or unreadable resource yields
//! absent values, never an error.

mod properties;
mod resource;

pub use properties::{Properties, PropertiesError, PropertiesResult};
pub use resource::{PropertiesResource, BUNDLED_PROPERTIES_NAME};

use serde::Serialize;

pub const APPLICATION_NAME: &str = "application.name";
pub const APPLICATION_VERSION: &str = "application.version";
pub const APPLICATION_BASE_URL: &str = "application.base_url";

/// Name, version and base URL of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub base_url: Option<String>,
}

impl ApplicationMetadata {
    /// Read the metadata from a resource.
    #[must_use]
    pub fn load(resource: &PropertiesResource) -> Self {
        Self::from_properties(&resource.load())
    }

    #[must_use]
    pub fn from_properties(properties: &Properties) -> Self {
        let value = |key| properties.get(key).map(str::to_string);
        Self {
            name: value(APPLICATION_NAME),
            version: value(APPLICATION_VERSION),
            base_url: value(APPLICATION_BASE_URL),
        }
    }
}

/// Read the bundled properties, or empty properties if they cannot be read.
#[must_use]
pub fn read_properties() -> Properties {
    PropertiesResource::Bundled.load()
}

#[must_use]
pub fn app_name() -> Option<String> {
    read_properties().get(APPLICATION_NAME).map(str::to_string)
}

#[must_use]
pub fn app_version() -> Option<String> {
    read_properties()
        .get(APPLICATION_VERSION)
        .map(str::to_string)
}

#[must_use]
pub fn base_url() -> Option<String> {
    read_properties()
        .get(APPLICATION_BASE_URL)
        .map(str::to_string)
}
