//! Argument and configuration error specs

use crate::prelude::*;

#[test]
fn unknown_kind_is_rejected() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&["watch", "queues", "--source", "jobs.json"])
        .fails()
        .stderr_has("invalid value");
}

#[test]
fn source_is_required() {
    Project::empty()
        .cw()
        .args(&["watch", "jobs"])
        .fails()
        .stderr_has("--source");
}

#[test]
fn zero_interval_is_rejected() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&["watch", "jobs", "--source", "jobs.json", "--interval", "0s"])
        .fails()
        .stderr_has("poll interval must be greater than zero");
}

#[test]
fn zero_buffer_is_rejected() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&["watch", "jobs", "--source", "jobs.json", "--buffer", "0"])
        .fails()
        .stderr_has("buffer size must be greater than zero");
}

#[test]
fn malformed_config_is_rejected() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);
    temp.file("cw.toml", "poll_interval = \"whenever\"\n");

    temp.cw()
        .args(&["watch", "jobs", "--source", "jobs.json", "--config", "cw.toml"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn missing_config_names_the_file() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&["watch", "jobs", "--source", "jobs.json", "--config", "absent.toml"])
        .fails()
        .stderr_has("absent.toml");
}

#[test]
fn exclude_completed_is_jobs_only() {
    let temp = Project::empty();
    temp.file("nodes.json", TWO_NODES);

    temp.cw()
        .args(&["watch", "nodes", "--source", "nodes.json", "--exclude-completed"])
        .fails()
        .stderr_has("only applies to jobs");
}
