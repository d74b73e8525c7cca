// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for watch events

use clap::ValueEnum;
use cw_core::{ResourceKind, WatchEvent};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per event
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Render a single streamed item in the chosen format
pub fn render<T: Serialize + Display>(value: &T, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => Some(value.to_string()),
        OutputFormat::Json => serde_json::to_string(value).ok(),
    }
}

pub fn print_event<K: ResourceKind>(event: &WatchEvent<K>, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if let Some(line) = render(event, format) {
                println!("{} {}", event.event_time.format("%H:%M:%S"), line);
            }
        }
        OutputFormat::Json => {
            if let Some(line) = render(event, format) {
                println!("{}", line);
            }
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
