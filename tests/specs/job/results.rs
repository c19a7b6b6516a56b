//! Detached execution round-trip specs.

use crate::prelude::*;

/// Detached runs print a job id immediately; the output lands in the store.
#[test]
fn detached_run_round_trip() {
    let temp = Project::empty();
    temp.script("hello.sh", "echo hi\n");

    let out = temp.pyjob().args(&["run", "hello", "--detach"]).passes();
    let id = out.stdout().trim().to_string();
    assert!(id.starts_with("job-"), "unexpected job id: {id}");

    temp.wait_for_finish(&id);
    temp.pyjob().args(&["result", &id]).passes().stdout_has("hi");
    temp.pyjob()
        .args(&["status", &id])
        .passes()
        .stdout_has("finished 0");
}

/// A failing detached job still persists its output and exit code.
#[test]
fn detached_failure_records_exit_code() {
    let temp = Project::empty();
    temp.script("fail.sh", "echo partial\nexit 7\n");

    let out = temp.pyjob().args(&["run", "fail", "--detach"]).passes();
    let id = out.stdout().trim().to_string();

    temp.wait_for_finish(&id);
    temp.pyjob()
        .args(&["result", &id])
        .passes()
        .stdout_has("partial");
    temp.pyjob()
        .args(&["status", &id])
        .passes()
        .stdout_has("finished 7");
}

/// Each detached launch gets its own id and output file.
#[test]
fn concurrent_detached_runs_stay_separate() {
    let temp = Project::empty();
    temp.script("say.sh", "echo \"said $1\"\n");

    let a = temp
        .pyjob()
        .args(&["run", "say", "--detach", "alpha"])
        .passes()
        .stdout()
        .trim()
        .to_string();
    let b = temp
        .pyjob()
        .args(&["run", "say", "--detach", "beta"])
        .passes()
        .stdout()
        .trim()
        .to_string();
    assert_ne!(a, b);

    temp.wait_for_finish(&a);
    temp.wait_for_finish(&b);
    temp.pyjob().args(&["result", &a]).passes().stdout_has("said alpha");
    temp.pyjob().args(&["result", &b]).passes().stdout_has("said beta");
}

/// A job id that was never issued reads as not found.
#[test]
fn unknown_id_is_not_found() {
    let temp = Project::empty();

    temp.pyjob()
        .args(&["result", "job-neverissued1234567"])
        .fails()
        .stderr_has("no stored result");
}

/// JSON result output carries the job id, output, and completion state.
#[test]
fn result_json_output() {
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

    let out = temp.pyjob().args(&["result", &id, "--json"]).passes();
    let value: serde_json::Value = serde_json::from_str(out.stdout().trim()).unwrap();
    assert_eq!(value["job_id"], id.as_str());
    assert!(value["output"].as_str().unwrap().contains("hi"));
    assert_eq!(value["status"]["state"], "finished");
    assert_eq!(value["status"]["exit_code"], 0);
}
