// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Host platform queries: operating system, environment variables and the
//! identifiers embedded in the user agent.

mod user_agent;

pub use user_agent::{build_user_agent, format_user_agent};

use serde::Serialize;
use std::env;

const UNKNOWN: &str = "unknown";

/// Name of the runtime reported in the user agent.
pub const RUNTIME_VENDOR: &str = "rust";

/// Version of the compiler that built this crate.
pub const RUNTIME_VERSION: &str = env!("CLI_SUPPORT_RUSTC_VERSION");

#[must_use]
pub fn is_windows() -> bool {
    cfg!(windows)
}

/// Get the value of an environment variable.
///
/// Returns `None` for an empty name, an unset variable, or a value that is not valid
/// unicode.
#[must_use]
pub fn environment_variable(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    env::var(name).ok()
}

/// Identifiers of the runtime and operating system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub runtime_vendor: String,
    pub runtime_version: String,
    pub os_name: String,
    pub os_version: String,
}

impl PlatformInfo {
    /// Query the identifiers of the host.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            runtime_vendor: RUNTIME_VENDOR.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
            os_name: env::consts::OS.to_string(),
            os_version: os_version().unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

#[cfg(target_os = "linux")]
fn os_version() -> Option<String> {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|release| release.trim().to_string())
        .filter(|release| !release.is_empty())
}

#[cfg(all(unix, not(target_os = "linux")))]
fn os_version() -> Option<String> {
    command_output("uname", &["-r"])
}

#[cfg(windows)]
fn os_version() -> Option<String> {
    command_output("cmd", &["/C", "ver"]).and_then(|output| parse_windows_version(&output))
}

#[cfg(not(any(unix, windows)))]
fn os_version() -> Option<String> {
    None
}

/// Run a command and return its trimmed standard output if it succeeds.
#[cfg(not(target_os = "linux"))]
fn command_output(command: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(command)
        .args(args)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}

/// Extract "10.0.19045.3803" from "Microsoft Windows [Version 10.0.19045.3803]".
#[cfg(any(windows, test))]
fn parse_windows_version(output: &str) -> Option<String> {
    let start = output.find("Version ")? + "Version ".len();
    let version = output[start..].split(']').next()?.trim();
    (!version.is_empty()).then(|| version.to_string())
}
