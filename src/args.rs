// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cli_support")]
#[command(version)]
#[command(about = "Inspects application metadata and normalizes source paths")]
pub(crate) struct Args {
    /// Show debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show application metadata, user agent and platform details.
    Info {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Read metadata from this properties file instead of the bundled one.
        #[arg(long)]
        properties: Option<PathBuf>,
    },

    /// Print the user-agent string.
    UserAgent,

    /// Print the common path prefix of the given paths.
    CommonPath {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Strip a base path from a path, or print its last segment if no base is given.
    ReplaceBasePath {
        path: String,

        #[arg(long, default_value = "")]
        base: String,
    },

    /// Print the value of an environment variable.
    Env { name: String },

    /// List source files under a directory relative to their common path.
    Sources {
        root: PathBuf,

        /// Only include files with this extension.
        #[arg(long)]
        extension: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    /// Log level used unless `RUST_LOG` is set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
