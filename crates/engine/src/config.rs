// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Poller configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_BUFFER_SIZE: usize = 100;
/// Largest capacity a tokio channel accepts
pub const MAX_BUFFER_SIZE: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// Poller settings, loadable from TOML:
///
/// ```toml
/// poll_interval = "2s"
/// buffer_size = 50
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Time between successive polls
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Events that can be in flight before a slow consumer stalls polling
    pub buffer_size: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl PollerConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(ConfigError::BufferTooLarge(self.buffer_size));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
