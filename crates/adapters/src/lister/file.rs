// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lister backed by a JSON file that is re-read on every call

use super::Lister;
use async_trait::async_trait;
use cw_core::{ListError, ListOptions, Resource, ResourceList};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Reads a JSON array of resources from `path`.
///
/// Whatever the file holds at call time is the collection, so rewriting the
/// file between polls drives state changes.
pub struct JsonFileLister<R> {
    path: PathBuf,
    _resource: PhantomData<fn() -> R>,
}

impl<R> JsonFileLister<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _resource: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> Clone for JsonFileLister<R> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

#[async_trait]
impl<R> Lister<R> for JsonFileLister<R>
where
    R: Resource + DeserializeOwned,
{
    async fn list(&self, opts: &ListOptions) -> Result<ResourceList<R>, ListError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ListError::Io {
                path: self.path.clone(),
                source,
            })?;

        let items: Vec<R> =
            serde_json::from_str(&text).map_err(|e| ListError::Decode(e.to_string()))?;

        let items = items
            .into_iter()
            .filter(|r| opts.admits_state(&r.state()))
            .collect();

        Ok(ResourceList::new(items))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
