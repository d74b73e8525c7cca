//! Help output specs

use crate::prelude::*;

#[test]
fn top_level_help_lists_watch() {
    Project::empty()
        .cw()
        .args(&["--help"])
        .passes()
        .stdout_has("watch")
        .stdout_has("completions");
}

#[test]
fn watch_help_lists_flags() {
    Project::empty()
        .cw()
        .args(&["watch", "--help"])
        .passes()
        .stdout_has("--source")
        .stdout_has("--interval")
        .stdout_has("--baseline")
        .stdout_has("--max-events")
        .stdout_has("--exclude-completed");
}

#[test]
fn completions_generate_for_bash() {
    Project::empty()
        .cw()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("cw");
}
