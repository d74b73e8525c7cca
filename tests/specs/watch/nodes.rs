//! Node and partition watch specs

use crate::prelude::*;

#[test]
fn nodes_baseline_uses_node_names() {
    let temp = Project::empty();
    temp.file("nodes.json", TWO_NODES);

    temp.cw()
        .args(&[
            "watch", "nodes", "--source", "nodes.json", "--interval", "50ms", "--baseline",
            "--max-events", "2",
        ])
        .passes()
        .stdout_has("node_new node-001 IDLE")
        .stdout_has("node_new node-002 ALLOCATED");
}

#[test]
fn partitions_json_carries_partition_name() {
    let temp = Project::empty();
    temp.file(
        "partitions.json",
        r#"[{"name": "debug", "state": "UP", "total_nodes": 4}]"#,
    );

    let run = temp
        .cw()
        .args(&[
            "watch", "partitions", "--source", "partitions.json", "--interval", "50ms",
            "--baseline", "--max-events", "1", "--format", "json",
        ])
        .passes();

    let events = run.json_lines();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "partition_new");
    assert_eq!(events[0]["partition_name"], "debug");
    assert_eq!(events[0]["partition"]["total_nodes"], 4);
}

#[test]
fn debug_logs_go_to_stderr() {
    let temp = Project::empty();
    temp.file("nodes.json", TWO_NODES);

    let run = temp
        .cw()
        .env("CW_LOG", "debug")
        .args(&[
            "watch", "nodes", "--source", "nodes.json", "--interval", "50ms", "--baseline",
            "--max-events", "1", "--format", "json",
        ])
        .passes()
        .stderr_has("watch started");

    assert_eq!(run.json_lines().len(), 1);
}
