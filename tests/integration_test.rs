// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use cli_support::config::{ApplicationMetadata, PropertiesResource};
use cli_support::path::{collapse_separators, PATH_SEPARATOR};
use cli_support::{
    app_name, app_version, base_url, build_user_agent, common_path, environment_variable,
    read_properties, replace_base_path, InfoReport, SourceFiles,
};
use tempfile::{NamedTempFile, TempDir};

/// Join segments with the host separator.
fn host_path(segments: &[&str]) -> String {
    segments.join(&PATH_SEPARATOR.to_string())
}

#[test]
fn test_bundled_metadata_matches_package() {
    let properties = read_properties();
    assert!(!properties.is_empty(), "Bundled properties should not be empty");

    assert_eq!(app_name().as_deref(), Some(env!("CARGO_PKG_NAME")));
    assert_eq!(app_version().as_deref(), Some(env!("CARGO_PKG_VERSION")));
    let url = base_url().expect("Base URL should be bundled");
    assert!(url.starts_with("https://"), "Unexpected base URL: {url}");
}

#[test]
fn test_user_agent_shape() {
    let user_agent = build_user_agent();
    let parts: Vec<&str> = user_agent.split(' ').collect();
    assert!(
        parts.len() >= 3,
        "User agent should have three components: {user_agent}"
    );
    assert_eq!(
        parts[0],
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    );
    assert!(parts[1].starts_with("rust/"));
    assert!(parts[2].starts_with(&format!("{}/", std::env::consts::OS)));
    assert!(std::ptr::eq(user_agent, build_user_agent()));
}

#[test]
fn test_metadata_from_custom_properties_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# custom build").unwrap();
    writeln!(file, "application.name = crowdin-cli").unwrap();
    writeln!(file, "application.version = 3.9.0").unwrap();
    writeln!(file, "application.base_url = https://example.crowdin.com").unwrap();
    file.flush().unwrap();

    let metadata = ApplicationMetadata::load(&PropertiesResource::file(file.path()));
    assert_eq!(metadata.name.as_deref(), Some("crowdin-cli"));
    assert_eq!(metadata.version.as_deref(), Some("3.9.0"));
    assert_eq!(
        metadata.base_url.as_deref(),
        Some("https://example.crowdin.com")
    );

    let report = InfoReport::new(&PropertiesResource::file(file.path()));
    assert_eq!(report.metadata(), &metadata);
}

#[test]
fn test_missing_properties_file_yields_absent_values() {
    let metadata = ApplicationMetadata::load(&PropertiesResource::File(PathBuf::from(
        "/nonexistent/cli.properties",
    )));
    assert_eq!(metadata.name, None);
    assert_eq!(metadata.version, None);
    assert_eq!(metadata.base_url, None);
}

#[test]
fn test_environment_variable_absent() {
    assert_eq!(environment_variable(""), None);
    assert_eq!(
        environment_variable("CLI_SUPPORT_INTEGRATION_UNSET_VARIABLE"),
        None
    );
}

#[test]
fn test_path_helpers_on_host() {
    let path = host_path(&["", "home", "user", "project", "src"]);
    let base = host_path(&["", "home", "user", "project"]);
    assert_eq!(replace_base_path(&path, &base), host_path(&["", "src"]));
    assert_eq!(replace_base_path(&path, ""), "src");

    let paths = [
        host_path(&["", "a", "b", "c"]),
        host_path(&["", "a", "b", "d"]),
        host_path(&["", "a", "x", "y"]),
    ];
    assert_eq!(common_path(&paths), host_path(&["", "a", ""]));

    let repeated = host_path(&["a", "", "", "b"]);
    let once = collapse_separators(&repeated);
    assert_eq!(once, host_path(&["a", "b"]));
    assert_eq!(collapse_separators(&once), once);
}

#[test]
fn test_sources_relative_to_common_path() {
    let dir = TempDir::new().unwrap();
    for file in ["locales/en/app.json", "locales/en/menu/main.json", "README.md"] {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{}").unwrap();
    }

    let sources = SourceFiles::discover(dir.path(), Some("json")).unwrap();
    assert_eq!(sources.files().len(), 2);
    assert!(sources
        .common_path()
        .ends_with(&host_path(&["locales", "en", ""])));
    assert_eq!(
        sources.relative_paths(),
        vec![
            host_path(&["", "app.json"]),
            host_path(&["", "menu", "main.json"])
        ]
    );
}
