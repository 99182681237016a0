// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use args::{Args, Command};
use cli_support::config::PropertiesResource;
use cli_support::messages::format_message;
use cli_support::path::{common_path, replace_base_path, SourceFiles};
use cli_support::platform::{build_user_agent, environment_variable};
use cli_support::report::{info_table, sources_table, InfoReport};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match args.command {
        Command::Info { json, properties } => show_info(properties, json),
        Command::UserAgent => {
            println!("{}", build_user_agent());
            Ok(())
        }
        Command::CommonPath { paths } => {
            println!("{}", common_path(&paths));
            Ok(())
        }
        Command::ReplaceBasePath { path, base } => {
            println!("{}", replace_base_path(&path, &base));
            Ok(())
        }
        Command::Env { name } => show_environment_variable(&name),
        Command::Sources {
            root,
            extension,
            json,
        } => show_sources(&root, extension.as_deref(), json),
    }
}

fn show_info(properties: Option<PathBuf>, json: bool) -> Result<()> {
    let resource = properties.map_or(PropertiesResource::Bundled, PropertiesResource::File);
    log::debug!("Collecting info: resource={}", resource.name());
    let report = InfoReport::new(&resource);
    if json {
        print_json(&report)
    } else {
        println!("{}", info_table(&report));
        Ok(())
    }
}

fn show_environment_variable(name: &str) -> Result<()> {
    match environment_variable(name) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!(format_message(
            "error.environment_variable_not_set",
            &[name]
        )),
    }
}

fn show_sources(root: &Path, extension: Option<&str>, json: bool) -> Result<()> {
    let sources = SourceFiles::discover(root, extension)
        .with_context(|| format!("Failed to discover source files: {}", root.display()))?;

    if json {
        return print_json(&SourcesOutput::new(&sources));
    }
    if sources.is_empty() {
        bail!(format_message(
            "error.no_source_files",
            &[&sources.root().display().to_string()]
        ));
    }
    println!(
        "{}",
        format_message("message.common_path", &[&sources.common_path()])
    );
    println!("{}", sources_table(&sources));
    println!(
        "\n{}",
        format_message(
            "message.source_files",
            &[
                &sources.files().len().to_string(),
                &sources.root().display().to_string()
            ]
        )
    );
    Ok(())
}

#[derive(Serialize)]
struct SourcesOutput<'a> {
    #[serde(flatten)]
    sources: &'a SourceFiles,
    common_path: String,
    relative_paths: Vec<String>,
}

impl<'a> SourcesOutput<'a> {
    fn new(sources: &'a SourceFiles) -> Self {
        Self {
            sources,
            common_path: sources.common_path(),
            relative_paths: sources.relative_paths(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{json}");
    Ok(())
}
