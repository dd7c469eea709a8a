//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn matreq(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("matreq").unwrap();
    cmd.env("MATREQ_DATA_DIR", data_dir.path())
        .env("MATREQ_USER", "kim")
        .env_remove("MATREQ_LOG");
    cmd
}

/// Create a request and return its id as printed by the CLI
fn create_request(data_dir: &TempDir, assignments: &[&str]) -> String {
    let mut cmd = matreq(data_dir);
    cmd.args(["request", "create"]);
    for assignment in assignments {
        cmd.args(["--set", assignment]);
    }

    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn test_init_creates_store() {
    let dir = TempDir::new().unwrap();

    matreq(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("requests.json").exists());

    matreq(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_schema_show() {
    let dir = TempDir::new().unwrap();

    matreq(&dir)
        .args(["schema", "show", "maktx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Material Description (MAKTX)"));

    matreq(&dir)
        .args(["schema", "show", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown attribute key"));
}

#[test]
fn test_request_requires_user() {
    let dir = TempDir::new().unwrap();

    matreq(&dir)
        .env_remove("MATREQ_USER")
        .args(["request", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MATREQ_USER"));
}

#[test]
fn test_create_edit_and_history() {
    let dir = TempDir::new().unwrap();
    let id = create_request(&dir, &["MATNR=100200", "MAKTX=얼큰한맛 라면"]);

    matreq(&dir)
        .args(["request", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("얼큰한맛 라면"))
        .stdout(predicate::str::contains("1 request(s)"));

    matreq(&dir)
        .args(["--user", "lee", "request", "edit", &id, "--set", "MAKTX=순한맛 라면"])
        .assert()
        .success()
        .stdout(predicate::str::contains("얼큰한맛 라면 → 순한맛 라면"));

    matreq(&dir)
        .args(["request", "history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("[changes]"))
        .stdout(predicate::str::contains("UPDATE"))
        .stdout(predicate::str::contains("CREATE"));
}

#[test]
fn test_stale_version_is_refused() {
    let dir = TempDir::new().unwrap();
    let id = create_request(&dir, &["MAKTX=a"]);

    matreq(&dir)
        .args(["request", "edit", &id, "--set", "MAKTX=b", "--expect-version", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version conflict"));
}

#[test]
fn test_duplicate_master_code_keeps_draft() {
    let dir = TempDir::new().unwrap();
    create_request(&dir, &["MATNR=100200"]);

    matreq(&dir)
        .args(["request", "create", "--set", "MATNR=100200", "--set", "MAKTX=copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--from-file"));

    let drafts: Vec<_> = std::fs::read_dir(dir.path().join("drafts"))
        .unwrap()
        .collect();
    assert_eq!(drafts.len(), 1);
}

#[test]
fn test_approve_and_export_sheets() {
    let dir = TempDir::new().unwrap();
    let approved = create_request(&dir, &["MATNR=100200", "MAKTX=얼큰한맛 라면"]);
    create_request(&dir, &["MATNR=100300", "MAKTX=pending"]);

    matreq(&dir)
        .args(["request", "status", &approved, "approved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested → Approved"));

    let out = TempDir::new().unwrap();
    matreq(&dir)
        .args(["export", "sheets"])
        .arg(out.path())
        .args(["--prefix", "mm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 request(s)"));

    let primary = std::fs::read_to_string(out.path().join("mm_primary.csv")).unwrap();
    assert!(primary.starts_with("MATNR,MTART,MBRSH,WERKS"));
    assert!(primary.contains("100200"));
    assert!(!primary.contains("100300"));
    assert!(out.path().join("mm_conversion-units.csv").exists());
}

#[test]
fn test_template_clone_from() {
    let dir = TempDir::new().unwrap();
    let source = create_request(&dir, &["MATNR=100200", "MAKTX=얼큰한맛 라면"]);

    let output = matreq(&dir)
        .args(["request", "create", "--clone-from", &source])
        .args(["--find", "얼큰한맛", "--replace", "순한맛"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8(output.stdout).unwrap().contains("순한맛 라면"));

    matreq(&dir)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 request(s)"));
}

#[test]
fn test_legacy_status_rejected() {
    let dir = TempDir::new().unwrap();
    let id = create_request(&dir, &["MAKTX=a"]);

    matreq(&dir)
        .args(["request", "status", &id, "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_export_all_json() {
    let dir = TempDir::new().unwrap();
    create_request(&dir, &["MAKTX=a"]);

    let out = TempDir::new().unwrap();
    let file = out.path().join("dump.json");
    matreq(&dir)
        .args(["export", "all"])
        .arg(&file)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(value["metadata"]["request_count"], 1);
}
