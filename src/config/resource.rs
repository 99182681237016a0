// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Locates properties resources, either bundled into the binary or on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::properties::{Properties, PropertiesError, PropertiesResult};
use crate::messages::format_message;

/// Logical name of the properties resource generated at build time.
pub const BUNDLED_PROPERTIES_NAME: &str = "/cli.properties";

static BUNDLED_PROPERTIES: &str = include_str!(concat!(env!("OUT_DIR"), "/cli.properties"));

/// Where a set of properties is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesResource {
    /// The application properties embedded at build time.
    Bundled,
    /// A properties file on disk.
    File(PathBuf),
}

impl PropertiesResource {
    /// Create a resource for a file on disk.
    #[must_use]
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Name of the resource for diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Bundled => BUNDLED_PROPERTIES_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read and parse the resource.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its content is malformed.
    pub fn try_load(&self) -> PropertiesResult<Properties> {
        match self {
            Self::Bundled => Properties::parse(BUNDLED_PROPERTIES),
            Self::File(path) => {
                let content =
                    fs::read_to_string(path).map_err(|e| PropertiesError::ReadFailed {
                        path: path.clone(),
                        source: e,
                    })?;
                Properties::parse(&content)
            }
        }
    }

    /// Read and parse the resource, falling back to empty properties.
    ///
    /// A failure is reported as a warning and never returned to the caller.
    #[must_use]
    pub fn load(&self) -> Properties {
        match self.try_load() {
            Ok(properties) => {
                log::debug!(
                    "Loaded properties: resource={}, entries={}",
                    self.name(),
                    properties.len()
                );
                properties
            }
            Err(e) => {
                log::warn!(
                    "{}: {e}",
                    format_message("error.read_resource_file", &[&self.name()])
                );
                Properties::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_resource_loads() {
        let properties = PropertiesResource::Bundled.try_load().unwrap();
        assert_eq!(
            properties.get("application.name"),
            Some(env!("CARGO_PKG_NAME"))
        );
        assert_eq!(
            properties.get("application.version"),
            Some(env!("CARGO_PKG_VERSION"))
        );
        assert!(properties.get("application.base_url").is_some());
    }

    #[test]
    fn test_file_resource_loads() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "application.name=test-app").unwrap();
        file.flush().unwrap();

        let properties = PropertiesResource::file(file.path()).load();
        assert_eq!(properties.get("application.name"), Some("test-app"));
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let resource = PropertiesResource::file("/nonexistent/cli.properties");
        let result = resource.try_load();
        assert!(matches!(result, Err(PropertiesError::ReadFailed { .. })));
        assert!(resource.load().is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "application.name=ok").unwrap();
        writeln!(file, "broken=\\uZZZZ").unwrap();
        file.flush().unwrap();

        assert!(PropertiesResource::file(file.path()).load().is_empty());
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(PropertiesResource::Bundled.name(), "/cli.properties");
        assert_eq!(
            PropertiesResource::file("/etc/app.properties").name(),
            "/etc/app.properties"
        );
    }
}
