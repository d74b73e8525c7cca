// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the poller

use crate::config::MAX_BUFFER_SIZE;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or validating poller configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("buffer size must be greater than zero")]
    ZeroBufferSize,
    #[error("buffer size {0} exceeds the maximum of {max}", max = MAX_BUFFER_SIZE)]
    BufferTooLarge(usize),
}

/// Errors returned synchronously by `watch`
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("watch must be started inside a tokio runtime")]
    NoRuntime,
}
