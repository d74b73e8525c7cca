// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource listing adapters

mod file;

pub use file::JsonFileLister;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeLister;

use async_trait::async_trait;
use cw_core::{ListError, ListOptions, Resource, ResourceList};

/// Adapter that lists the current collection of one resource kind.
///
/// An `Err` marks the poll cycle as failed; an empty `Ok` is a valid,
/// fully drained collection. Pollers may call one lister from several
/// watch sessions at once.
#[async_trait]
pub trait Lister<R: Resource>: Clone + Send + Sync + 'static {
    async fn list(&self, opts: &ListOptions) -> Result<ResourceList<R>, ListError>;
}
