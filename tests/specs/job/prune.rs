//! Retention pruning specs.

use crate::prelude::*;

/// `prune` with the default cutoff removes every stored output.
#[test]
fn prune_zero_removes_all_outputs() {
    let temp = Project::empty();
    temp.script("hello.sh", "echo hi\n");

    for _ in 0..2 {
        let id = temp
            .pyjob()
            .args(&["run", "hello", "--detach"])
            .passes()
            .stdout()
            .trim()
            .to_string();
        temp.wait_for_finish(&id);
    }

    // Give coarse-mtime filesystems a full second before "older than now".
    std::thread::sleep(Duration::from_millis(1100));
    temp.pyjob()
        .args(&["prune"])
        .passes()
        .stdout_has("Pruned 2 output file(s)");
    assert!(temp.output_files().is_empty());
}

/// A generous max-age keeps outputs that are younger than the cutoff.
#[test]
fn prune_keeps_recent_outputs() {
    let temp = Project::empty();
    temp.script("hello.sh", "echo hi\n");

    let id = temp
        .pyjob()
        .args(&["run", "hello", "--detach"])
        .passes()
        .stdout()
        .trim()
        .to_string();
    temp.wait_for_finish(&id);

    temp.pyjob()
        .args(&["prune", "--max-age-secs", "3600"])
        .passes()
        .stdout_has("Pruned 0 output file(s)");
    temp.pyjob().args(&["result", &id]).passes().stdout_has("hi");
}

/// Files that are not job output are never touched.
#[test]
fn prune_leaves_foreign_files_alone() {
    let temp = Project::empty();
    std::fs::write(temp.outputs_dir().join("notes.txt"), "keep me").unwrap();

    temp.pyjob()
        .args(&["prune"])
        .passes()
        .stdout_has("Pruned 0 output file(s)");
    assert_eq!(temp.output_files(), vec!["notes.txt".to_string()]);
}

/// JSON prune output reports the removed count.
#[test]
fn prune_json_output() {
    let temp = Project::empty();

    let out = temp.pyjob().args(&["prune", "--json"]).passes();
    let value: serde_json::Value = serde_json::from_str(out.stdout().trim()).unwrap();
    assert_eq!(value["removed"], 0);
}
