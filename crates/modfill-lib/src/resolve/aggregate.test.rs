use super::*;
use crate::api::{FileCandidate, MockCurseForgeClient, ProjectCandidate};
use crate::display::{DisplayCall, MockDisplayProvider};
use crate::resolve::ResolverConfig;
use crate::resolve::outcome::UnresolvedReason;
use crate::resolve::selection::AutomaticStrategy;
use std::time::Instant;

fn project(id: u32, name: &str) -> ProjectCandidate {
    ProjectCandidate {
        id,
        name: name.to_string(),
        download_count: 1_000,
    }
}

fn file(id: u32, version: &str) -> FileCandidate {
    FileCandidate {
        id,
        file_name: format!("mod-{version}.jar"),
        display_name: format!("mod {version}"),
        game_versions: vec![version.to_string()],
        file_date: "2024-06-01".to_string(),
        download_count: 10,
    }
}

fn requests(names: &[&str]) -> Vec<ModRequest> {
    names.iter().map(|name| ModRequest::new(*name)).collect()
}

async fn fixture_client() -> MockCurseForgeClient {
    MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create")]))
        .await
        .with_files_result(1, Ok(vec![file(11, "1.21.1")]))
        .await
        .with_search_result("Sodium", Ok(vec![project(2, "Sodium")]))
        .await
        .with_files_result(2, Ok(vec![file(21, "1.21")]))
        .await
        // Found, but nothing to download
        .with_search_result("Ghost", Ok(vec![project(3, "Ghost")]))
        .await
        .with_files_result(3, Ok(Vec::new()))
        .await
        .with_search_result("Flaky", Err("connection reset by peer".to_string()))
        .await
}

fn no_delay_config() -> ResolverConfig {
    ResolverConfig {
        request_delay: Duration::ZERO,
        ..ResolverConfig::default()
    }
}

#[tokio::test]
async fn test_no_search_results_recorded() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    let report = resolve_all(
        &requests(&["ObscureMod123"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    assert!(report.manifest_files().is_empty());
    let unresolved = report.unresolved();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(
        serde_json::to_value(unresolved[0]).unwrap(),
        serde_json::json!({"name": "ObscureMod123", "reason": "no_search"})
    );
}

#[tokio::test]
async fn test_empty_listing_does_not_stop_the_run() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    let report = resolve_all(
        &requests(&["Ghost", "Create"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.unresolved()[0].reason, UnresolvedReason::NoMatchingFile);
    assert_eq!(report.unresolved()[0].project_id, Some(3));
    assert_eq!(
        report.manifest_files(),
        vec![ManifestFile {
            project_id: 1,
            file_id: 11
        }]
    );
}

#[tokio::test]
async fn test_diagnostics_use_short_reason_codes() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    let report = resolve_all(
        &requests(&["ObscureMod123", "Ghost", "Create"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    let diagnostics: serde_json::Value =
        serde_json::from_str(&crate::manifest::diagnostics_json(&report.unresolved()).unwrap())
            .unwrap();
    assert_eq!(
        diagnostics,
        serde_json::json!([
            {"name": "ObscureMod123", "reason": "no_search"},
            {"name": "Ghost", "reason": "no_file", "projectID": 3, "detail": "project lists no files"}
        ])
    );
}

#[tokio::test]
async fn test_transport_error_mid_run() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    let report = resolve_all(
        &requests(&["Create", "Flaky", "Sodium"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    let files: Vec<(u32, u32)> = report
        .manifest_files()
        .iter()
        .map(|f| (f.project_id, f.file_id))
        .collect();
    assert_eq!(files, vec![(1, 11), (2, 21)]);

    let unresolved = report.unresolved();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].name, "Flaky");
    assert_eq!(unresolved[0].reason, UnresolvedReason::RequestError);
    assert!(
        unresolved[0]
            .detail
            .as_deref()
            .unwrap()
            .contains("connection reset by peer")
    );
    assert_eq!(
        client.calls().await,
        vec![
            "search:Create".to_string(),
            "files:1".to_string(),
            "search:Flaky".to_string(),
            "search:Sodium".to_string(),
            "files:2".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_counts_and_order_are_preserved() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();
    let names = ["Sodium", "Ghost", "Create", "Missing", "Create", "Flaky"];

    let report = resolve_all(
        &requests(&names),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    let result_names: Vec<&str> = report.results.iter().map(|r| r.name()).collect();
    assert_eq!(result_names, names);
    assert_eq!(report.manifest_files().len(), report.resolved_count());
    assert_eq!(
        report.manifest_files().len() + report.unresolved().len(),
        names.len()
    );
    // Duplicate requests resolve twice
    let files: Vec<u32> = report.manifest_files().iter().map(|f| f.file_id).collect();
    assert_eq!(files, vec![21, 11, 11]);

    let summary = report.summary();
    assert_eq!((summary.successful, summary.failed), (3, 3));
    assert!(summary.is_partial_success());
}

#[tokio::test]
async fn test_outcomes_are_displayed_per_request() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    resolve_all(
        &requests(&["Create", "Missing"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        config.request_delay,
    )
    .await;

    assert_eq!(display.count_calls("checking"), 2);
    assert!(display.has_call(&DisplayCall::Success {
        item: "Create".to_string(),
        details: "projectID=1, fileID=11 (mod-1.21.1.jar)".to_string(),
    }));
    assert!(display.has_call(&DisplayCall::Error {
        item: "Missing".to_string(),
        details: "no_search".to_string(),
    }));
}

#[tokio::test]
async fn test_delay_between_requests() {
    let client = fixture_client().await;
    let config = no_delay_config();
    let display = MockDisplayProvider::new();
    let delay = Duration::from_millis(25);

    let started = Instant::now();
    resolve_all(
        &requests(&["Missing", "Missing", "Missing"]),
        &AutomaticStrategy::new(&client, &config),
        &display,
        delay,
    )
    .await;

    // Two gaps for three requests, none before the first
    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_empty_request_list() {
    let client = MockCurseForgeClient::new();
    let config = no_delay_config();
    let display = MockDisplayProvider::new();

    let report = resolve_all(
        &[],
        &AutomaticStrategy::new(&client, &config),
        &display,
        Duration::from_secs(60),
    )
    .await;

    assert!(report.results.is_empty());
    assert_eq!(report.summary().total, 0);
    assert!(client.calls().await.is_empty());
}
