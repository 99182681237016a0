// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Build script to generate the bundled resources for the `cli_support` crate.
//!
//! This script:
//! - Writes `cli.properties` into `OUT_DIR` with the application name, version and base URL
//! - Records the version of the compiling `rustc` for the user-agent string
//!
//! The base URL defaults to the public API and can be overridden with `CLI_SUPPORT_BASE_URL`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const DEFAULT_BASE_URL: &str = "https://api.crowdin.com";

/// Query the version of the compiler used for this build.
fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    // "rustc 1.80.0 (051478957 2024-07-21)" -> "1.80.0"
    String::from_utf8(output.stdout)
        .ok()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}

/// Escape a value for the properties format.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ' ' if i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn generate_properties(out_dir: &Path) {
    let name = env::var("CARGO_PKG_NAME").expect("CARGO_PKG_NAME not set");
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");
    let base_url =
        env::var("CLI_SUPPORT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let content = format!(
        "# Generated by build.rs\n\
         application.name={}\n\
         application.version={}\n\
         application.base_url={}\n",
        escape_value(&name),
        escape_value(&version),
        escape_value(&base_url),
    );
    fs::write(out_dir.join("cli.properties"), content)
        .expect("Failed to write cli.properties");
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    generate_properties(Path::new(&out_dir));

    let rustc = rustc_version().unwrap_or_else(|| {
        println!("cargo:warning=Failed to determine rustc version, using 'unknown'");
        "unknown".to_string()
    });
    println!("cargo:rustc-env=CLI_SUPPORT_RUSTC_VERSION={rustc}");

    println!("cargo:rerun-if-env-changed=CLI_SUPPORT_BASE_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
