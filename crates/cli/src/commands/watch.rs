// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cw watch <kind>` - stream changes from a resource listing

use crate::output::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use cw_adapters::{JsonFileLister, TracedLister};
use cw_core::{
    Jobs, Nodes, Partitions, ResourceKind, WatchJobsOptions, WatchNodesOptions,
    WatchPartitionsOptions,
};
use cw_engine::{CancellationToken, Poller, PollerConfig};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResourceArg {
    Jobs,
    Nodes,
    Partitions,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Resource kind to watch
    #[arg(value_enum)]
    pub kind: ResourceArg,

    /// JSON file holding the current listing (an array of resources)
    #[arg(long)]
    pub source: PathBuf,

    /// TOML file with poll_interval and buffer_size
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Time between polls, e.g. "2s" or "500ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,

    /// Event buffer size
    #[arg(long)]
    pub buffer: Option<usize>,

    /// Treat a listing that takes longer than this as failed
    #[arg(long, value_parser = humantime::parse_duration)]
    pub list_timeout: Option<Duration>,

    /// Only report these job ids or node/partition names (repeatable)
    #[arg(long = "key")]
    pub keys: Vec<String>,

    /// Only list resources in these states (repeatable)
    #[arg(long = "state")]
    pub states: Vec<String>,

    /// Suppress events for newly appearing resources
    #[arg(long)]
    pub exclude_new: bool,

    /// Suppress completion events (jobs only)
    #[arg(long)]
    pub exclude_completed: bool,

    /// Report resources present on the first poll as new
    #[arg(long)]
    pub baseline: bool,

    /// Stop after this many events
    #[arg(long)]
    pub max_events: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl WatchArgs {
    fn poller_config(&self) -> Result<PollerConfig> {
        let mut config = match &self.config {
            Some(path) => PollerConfig::load(path)?,
            None => PollerConfig::default(),
        };
        if let Some(interval) = self.interval {
            config = config.with_poll_interval(interval);
        }
        if let Some(buffer) = self.buffer {
            config = config.with_buffer_size(buffer);
        }
        config.validate()?;
        Ok(config)
    }

    fn job_options(&self) -> WatchJobsOptions {
        let mut opts = WatchJobsOptions::new()
            .with_job_ids(&self.keys)
            .with_states(&self.states);
        if self.exclude_new {
            opts = opts.exclude_new();
        }
        if self.exclude_completed {
            opts = opts.exclude_completed();
        }
        if self.baseline {
            opts = opts.emit_baseline();
        }
        opts.max_events = self.max_events;
        opts
    }

    fn node_options(&self) -> WatchNodesOptions {
        let mut opts = WatchNodesOptions::new()
            .with_node_names(&self.keys)
            .with_states(&self.states);
        if self.exclude_new {
            opts = opts.exclude_new();
        }
        if self.baseline {
            opts = opts.emit_baseline();
        }
        opts.max_events = self.max_events;
        opts
    }

    fn partition_options(&self) -> WatchPartitionsOptions {
        let mut opts = WatchPartitionsOptions::new()
            .with_partition_names(&self.keys)
            .with_states(&self.states);
        if self.exclude_new {
            opts = opts.exclude_new();
        }
        if self.baseline {
            opts = opts.emit_baseline();
        }
        opts.max_events = self.max_events;
        opts
    }
}

pub async fn handle(args: WatchArgs) -> Result<()> {
    if args.exclude_completed && !matches!(args.kind, ResourceArg::Jobs) {
        bail!("--exclude-completed only applies to jobs");
    }
    let config = args.poller_config()?;

    let cancel = CancellationToken::new();
    let token = cancel.clone();
    ctrlc::set_handler(move || token.cancel()).context("failed to install Ctrl-C handler")?;

    match args.kind {
        ResourceArg::Jobs => {
            stream::<Jobs>(&args, config, args.job_options(), cancel).await
        }
        ResourceArg::Nodes => {
            stream::<Nodes>(&args, config, args.node_options(), cancel).await
        }
        ResourceArg::Partitions => {
            stream::<Partitions>(&args, config, args.partition_options(), cancel).await
        }
    }
}

async fn stream<K>(
    args: &WatchArgs,
    config: PollerConfig,
    opts: K::Options,
    cancel: CancellationToken,
) -> Result<()>
where
    K: ResourceKind,
    K::Resource: DeserializeOwned,
{
    let mut lister = TracedLister::new(JsonFileLister::<K::Resource>::new(&args.source));
    if let Some(limit) = args.list_timeout {
        lister = lister.with_timeout(limit);
    }
    let poller = Poller::<K, _>::new(lister).with_config(config);

    tracing::info!(kind = K::NAME, source = %args.source.display(), "watching");
    let mut rx = poller.watch(cancel, opts)?;
    while let Some(event) = rx.recv().await {
        output::print_event(&event, args.format);
    }
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
