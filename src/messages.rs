// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Bundled catalogue of console and diagnostic messages.

use std::sync::LazyLock;

use crate::config::Properties;

static BUNDLED_MESSAGES: &str = include_str!("../resources/messages.properties");

static MESSAGES: LazyLock<Messages> = LazyLock::new(Messages::bundled);

/// Message templates keyed by name. Each `%s` in a template is a positional placeholder.
#[derive(Debug, Default)]
pub struct Messages {
    templates: Properties,
}

impl Messages {
    /// Load the catalogue shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        match Properties::parse(BUNDLED_MESSAGES) {
            Ok(templates) => Self { templates },
            Err(e) => {
                // The resource reader reports through this catalogue, so it cannot be used here.
                log::error!("Failed to parse bundled messages: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn from_properties(templates: Properties) -> Self {
        Self { templates }
    }

    /// Get the template for `key`, or the key itself if there is none.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.templates.get(key).unwrap_or(key)
    }

    /// Fill the template for `key` with `args`.
    ///
    /// Placeholders without a matching argument are left as `%s`.
    #[must_use]
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = self.get(key);
        let mut args = args.iter();
        let mut parts = template.split("%s");
        let mut message = String::with_capacity(template.len());

        if let Some(first) = parts.next() {
            message.push_str(first);
        }
        for part in parts {
            message.push_str(args.next().copied().unwrap_or("%s"));
            message.push_str(part);
        }
        message
    }
}

/// Look up a message template in the bundled catalogue.
#[must_use]
pub fn message(key: &str) -> &str {
    MESSAGES.get(key)
}

/// Format a message from the bundled catalogue.
#[must_use]
pub fn format_message(key: &str, args: &[&str]) -> String {
    MESSAGES.format(key, args)
}
