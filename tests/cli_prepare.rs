//! End-to-end runs of the scanprep binary.

mod common;

use serde_json::Value;

use common::{run_scanprep, Workspace};

fn ndjson(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad line {l:?}: {e}")))
        .collect()
}

#[test]
fn dry_run_reports_plan_and_leaves_files() {
    let ws = Workspace::new();
    let workspace = ws.path().to_str().unwrap().to_string();
    let main = ws.main_config().to_str().unwrap().to_string();

    let result = run_scanprep(
        &["--workspace", &workspace, "--main-config", &main, "--dry-run"],
        &[],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("(dry run)"));
    assert!(result.stdout.contains("remote-clean: ssh alice@scan01 "));
    assert!(result.stdout.contains("copy: scp -r "));
    assert!(result.stdout.contains("Done"));
    assert!(ws.project("node_modules/left-pad/index.js").exists());
    assert!(ws.project("build.log").exists());
}

#[test]
fn dry_run_json_emits_ndjson_event_stream() {
    let ws = Workspace::new();
    let workspace = ws.path().to_str().unwrap().to_string();
    let main = ws.main_config().to_str().unwrap().to_string();

    let result = run_scanprep(
        &["--workspace", &workspace, "--main-config", &main, "--dry-run", "--json"],
        &[],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    let events = ndjson(&result.stdout);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "prepare");
    assert_eq!(events[0]["dry_run"], true);

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");

    let params = events
        .iter()
        .find(|e| e["event"] == "params_resolved")
        .expect("params_resolved event");
    assert_eq!(params["params"]["project_name"], "api");
    assert_eq!(params["params"]["ssh_host"], "scan01");

    let pruned: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "path_pruned")
        .map(|e| e["pattern"].as_str().unwrap())
        .collect();
    assert_eq!(pruned.len(), 2);
    assert!(pruned.contains(&"node_modules"));
    assert!(pruned.contains(&"\\.log$"));
}

#[test]
fn environment_variables_configure_the_run() {
    let ws = Workspace::new();

    let result = run_scanprep(
        &["--dry-run", "--json"],
        &[
            ("WORKSPACE", ws.path().to_str().unwrap()),
            ("MAIN_YML_PATH", ws.main_config().to_str().unwrap()),
        ],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    let events = ndjson(&result.stdout);
    assert_eq!(events.last().unwrap()["status"], "success");
}

#[test]
fn missing_workspace_exits_non_zero() {
    let result = run_scanprep(&["--json"], &[]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    let events = ndjson(&result.stdout);
    let failed = events
        .iter()
        .find(|e| e["event"] == "stage_failed")
        .expect("stage_failed event");
    assert_eq!(failed["stage"], "workspace");
    assert_eq!(events.last().unwrap()["status"], "failed");
    assert!(result.stderr.contains("workspace stage failed"));
}

#[test]
fn relative_workspace_is_rejected() {
    let result = run_scanprep(&["--workspace", "relative/dir"], &[]);

    assert!(!result.success);
    assert!(result.stderr.contains("workspace stage failed"));
}

#[test]
fn unknown_project_config_name_fails_load() {
    let ws = Workspace::new();
    let workspace = ws.path().to_str().unwrap().to_string();
    let main = ws.main_config().to_str().unwrap().to_string();

    let result = run_scanprep(
        &[
            "--workspace",
            &workspace,
            "--main-config",
            &main,
            "--config-name",
            "absent.yml",
        ],
        &[],
    );

    assert!(!result.success);
    assert!(result.stderr.contains("load-config stage failed"));
    assert!(result.stderr.contains("absent.yml"));
    assert!(ws.project("node_modules").exists());
}

#[test]
fn help_lists_environment_fallbacks() {
    let result = run_scanprep(&["--help"], &[]);

    assert!(result.success);
    assert!(result.stdout.contains("WORKSPACE"));
    assert!(result.stdout.contains("MAIN_YML_PATH"));
    assert!(result.stdout.contains("--dry-run"));
}
