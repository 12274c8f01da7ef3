//! Binary-level tests for the modfill CLI

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn modfill(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modfill"));
    cmd.current_dir(dir.path())
        .env_remove("CURSEFORGE_API_KEY")
        .env_remove("MODFILL_CURSEFORGE_BASE_URL")
        .env_remove("RUST_LOG")
        .env("MODFILL_COLOR", "never");
    cmd
}

fn write_pack(dir: &TempDir, mods: Value) {
    fs::write(dir.path().join("mods.json"), mods.to_string()).unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        json!({"name": "CLI Pack", "files": [], "overrides": "overrides"}).to_string(),
    )
    .unwrap();
}

#[test]
fn version_prints_package_version() {
    let dir = TempDir::new().unwrap();
    modfill(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "modfill {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_command_points_at_help() {
    let dir = TempDir::new().unwrap();
    modfill(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("modfill --help"));
}

#[test]
fn resolve_without_key_fails() {
    let dir = TempDir::new().unwrap();
    write_pack(&dir, json!([{"name": "Create"}]));

    modfill(&dir)
        .args([
            "resolve",
            "--modlist",
            "mods.json",
            "--manifest",
            "manifest.json",
            "--output",
            "out.json",
            "--non-interactive",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"));

    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn invalid_page_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    modfill(&dir)
        .args(["--page-size", "0", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page"));
}

#[test]
fn interactive_resolve_without_terminal_fails() {
    let dir = TempDir::new().unwrap();
    write_pack(&dir, json!([{"name": "Create"}]));

    modfill(&dir)
        .env("CURSEFORGE_API_KEY", "test-key")
        .args([
            "resolve",
            "--modlist",
            "mods.json",
            "--manifest",
            "manifest.json",
            "--output",
            "out.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--non-interactive"));
}

#[test]
fn non_interactive_resolve_writes_manifest() {
    let mut server = Server::new();
    let search = server
        .mock("GET", "/v1/mods/search")
        .match_query(Matcher::UrlEncoded("searchFilter".into(), "Create".into()))
        .match_header("x-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [{"id": 328085, "name": "Create", "downloadCount": 120000000}],
                "pagination": {"index": 0, "pageSize": 1, "resultCount": 1, "totalCount": 1}
            })
            .to_string(),
        )
        .create();
    let files = server
        .mock("GET", "/v1/mods/328085/files")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [
                    {"id": 11, "fileName": "create-1.20.1.jar", "gameVersions": ["1.20.1"],
                     "fileDate": "2023-06-01T00:00:00Z", "downloadCount": 900},
                    {"id": 12, "fileName": "create-1.21.1.jar", "gameVersions": ["1.21.1"],
                     "fileDate": "2025-01-01T00:00:00Z", "downloadCount": 10}
                ],
                "pagination": {"index": 0, "pageSize": 2, "resultCount": 2, "totalCount": 2}
            })
            .to_string(),
        )
        .create();

    let dir = TempDir::new().unwrap();
    write_pack(&dir, json!([{"name": "Create"}, {"name": ""}]));

    modfill(&dir)
        .env("CURSEFORGE_API_KEY", "test-key")
        .env("MODFILL_CURSEFORGE_BASE_URL", server.url())
        .env("MODFILL_REQUEST_DELAY_MS", "0")
        .args([
            "resolve",
            "--modlist",
            "mods.json",
            "--manifest",
            "manifest.json",
            "--output",
            "out.json",
            "--non-interactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote manifest"));

    let written: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(written["files"], json!([{"projectID": 328085, "fileID": 12}]));
    assert_eq!(written["name"], "CLI Pack");

    search.assert();
    files.assert();
}
