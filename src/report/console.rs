// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats reports as console tables.

use comfy_table::{Cell, Table};

use super::InfoReport;
use crate::path::SourceFiles;

const ABSENT: &str = "-";

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

fn header(names: [&str; 2]) -> Vec<Cell> {
    names
        .into_iter()
        .map(|name| Cell::new(name).add_attribute(comfy_table::Attribute::Bold))
        .collect()
}

/// Create a table showing application metadata and platform identifiers.
#[must_use]
pub fn info_table(report: &InfoReport) -> Table {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| ABSENT.to_string());

    let mut table = default_table_preset();
    table
        .set_header(header(["Property", "Value"]))
        .add_row(vec![Cell::new("Resource"), Cell::new(&report.resource)])
        .add_row(vec![
            Cell::new("Name"),
            Cell::new(optional(&report.metadata.name)),
        ])
        .add_row(vec![
            Cell::new("Version"),
            Cell::new(optional(&report.metadata.version)),
        ])
        .add_row(vec![
            Cell::new("Base URL"),
            Cell::new(optional(&report.metadata.base_url)),
        ])
        .add_row(vec![Cell::new("User agent"), Cell::new(report.user_agent)])
        .add_row(vec![
            Cell::new("Operating system"),
            Cell::new(format!(
                "{} {}",
                report.platform.os_name, report.platform.os_version
            )),
        ])
        .add_row(vec![
            Cell::new("Path separator"),
            Cell::new(report.path_separator),
        ]);
    table
}

/// Create a table mapping each discovered file to its path relative to the common prefix.
#[must_use]
pub fn sources_table(sources: &SourceFiles) -> Table {
    let mut table = default_table_preset();
    table.set_header(header(["File", "Relative path"]));
    for (file, relative) in sources.files().iter().zip(sources.relative_paths()) {
        table.add_row(vec![Cell::new(file), Cell::new(relative)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertiesResource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_info_table_rows() {
        let report = InfoReport::new(&PropertiesResource::file("/nonexistent/cli.properties"));
        let rendered = info_table(&report).to_string();
        assert!(rendered.contains("Base URL"));
        assert!(rendered.contains("User agent"));
        assert_eq!(info_table(&report).row_iter().count(), 7);
    }

    #[test]
    fn test_sources_table_rows() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();

        let sources = SourceFiles::discover(dir.path(), None).unwrap();
        let table = sources_table(&sources);
        assert_eq!(table.row_iter().count(), 2);
    }
}
