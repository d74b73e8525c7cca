//! Job watch specs

use crate::prelude::*;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn baseline_reports_every_job_as_new() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&[
            "watch", "jobs", "--source", "jobs.json", "--interval", "50ms", "--baseline",
            "--max-events", "2",
        ])
        .passes()
        .stdout_has("job_new 1 RUNNING")
        .stdout_has("job_new 2 PENDING");
}

#[test]
fn json_format_emits_one_object_per_event() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    let run = temp
        .cw()
        .args(&[
            "watch", "jobs", "--source", "jobs.json", "--interval", "50ms", "--baseline",
            "--max-events", "2", "--format", "json",
        ])
        .passes();

    let events = run.json_lines();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["type"], "job_new");
    assert_eq!(events[0]["job_id"], "1");
    assert_eq!(events[0]["job"]["name"], "train");
    assert!(events[0]["event_time"].is_string());
    assert_eq!(events[1]["job_id"], "2");
}

#[test]
fn key_filter_limits_output() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&[
            "watch", "jobs", "--source", "jobs.json", "--interval", "50ms", "--baseline",
            "--key", "2", "--max-events", "1",
        ])
        .passes()
        .stdout_has("job_new 2 PENDING")
        .stdout_lacks("job_new 1");
}

#[test]
fn state_filter_limits_listing() {
    let temp = Project::empty();
    temp.file("jobs.json", TWO_JOBS);

    temp.cw()
        .args(&[
            "watch", "jobs", "--source", "jobs.json", "--interval", "50ms", "--baseline",
            "--state", "RUNNING", "--max-events", "1",
        ])
        .passes()
        .stdout_has("job_new 1 RUNNING")
        .stdout_lacks("PENDING");
}

#[test]
fn unreadable_source_is_reported_as_event() {
    let temp = Project::empty();

    temp.cw()
        .args(&[
            "watch", "jobs", "--source", "missing.json", "--interval", "50ms",
            "--max-events", "1",
        ])
        .passes()
        .stdout_has("error: failed to read")
        .stdout_has("missing.json");
}

#[test]
fn malformed_listing_is_reported_as_event() {
    let temp = Project::empty();
    temp.file("jobs.json", "{ not json");

    temp.cw()
        .args(&[
            "watch", "jobs", "--source", "jobs.json", "--interval", "50ms", "--max-events", "1",
        ])
        .passes()
        .stdout_has("failed to decode listing");
}

#[test]
fn vanished_job_is_reported_completed() {
    let temp = Project::empty();
    let source = temp.file("jobs.json", TWO_JOBS);

    let mut child = Command::new(assert_cmd::cargo::cargo_bin("cw"))
        .current_dir(temp.path())
        .args(["watch", "jobs", "--source"])
        .arg(&source)
        .args(["--interval", "100ms", "--max-events", "1", "--format", "json"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Let the baseline poll land before the listing changes
    std::thread::sleep(Duration::from_millis(600));
    temp.file("jobs.json", r#"[{"job_id": 2, "state": "PENDING"}]"#);

    let deadline = Instant::now() + Duration::from_secs(20);
    loop {
        if child.try_wait().unwrap().is_some() {
            break;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("watch did not exit after the change");
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    let mut stdout = String::new();
    child.stdout.take().unwrap().read_to_string(&mut stdout).unwrap();
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["type"], "job_completed");
    assert_eq!(event["job_id"], "1");
    assert_eq!(event["old_state"], "RUNNING");
    assert_eq!(event["new_state"], "COMPLETED");
}
