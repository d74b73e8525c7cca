// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polled cluster resources
//!
//! The engine only needs two things from a resource: a stable identity key
//! and a coarse state label. Everything else is carried through untouched.

use serde::{Deserialize, Serialize};

/// A polled entity with a stable key and a state label
pub trait Resource: Clone + Send + Sync + 'static {
    /// Stable identity (job id, node name, partition name)
    fn key(&self) -> String;

    /// Coarse state label, compared byte-for-byte between polls
    fn state(&self) -> String;
}

/// A compute job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    pub state: String,
}

impl Job {
    pub fn new(job_id: u32, state: impl Into<String>) -> Self {
        Self {
            job_id,
            name: None,
            user_id: None,
            partition: None,
            state: state.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }
}

impl Resource for Job {
    fn key(&self) -> String {
        self.job_id.to_string()
    }

    fn state(&self) -> String {
        self.state.clone()
    }
}

/// A compute node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            partitions: Vec::new(),
            reason: None,
        }
    }

    pub fn with_partitions(mut self, partitions: &[&str]) -> Self {
        self.partitions = partitions.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl Resource for Node {
    fn key(&self) -> String {
        self.name.clone()
    }

    fn state(&self) -> String {
        self.state.clone()
    }
}

/// A scheduling partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_nodes: Option<u32>,
}

impl Partition {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            total_nodes: None,
        }
    }

    pub fn with_total_nodes(mut self, total: u32) -> Self {
        self.total_nodes = Some(total);
        self
    }
}

impl Resource for Partition {
    fn key(&self) -> String {
        self.name.clone()
    }

    fn state(&self) -> String {
        self.state.clone()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
