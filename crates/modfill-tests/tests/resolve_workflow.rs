//! End-to-end resolve runs against a local CurseForge stand-in
//!
//! Real files on disk, the live HTTP client and a mockito server serving
//! recorded-shape payloads.

use anyhow::Result;
use mockito::{Matcher, Server, ServerGuard};
use modfill_lib::api::LiveCurseForgeClient;
use modfill_lib::application::AppConfig;
use modfill_lib::application::commands::{ResolveArgs, handle_resolve};
use modfill_lib::application::session::{CommandSession, LiveFileSystemProvider};
use modfill_lib::application::session_mocks::MockConfigProvider;
use modfill_lib::networking::{NetworkingConfig, NetworkingManager};
use modfill_tests::TestEnvironment;
use modfill_tests::fixtures::{file_json, page_body, project_json};
use serde_json::json;
use std::sync::Arc;

fn test_config() -> AppConfig {
    AppConfig {
        curseforge_api_key: Some("test-key".to_string()),
        request_delay_ms: 0,
        ..AppConfig::default()
    }
}

fn client_for(server: &ServerGuard) -> Result<LiveCurseForgeClient> {
    let networking = Arc::new(NetworkingManager::new(NetworkingConfig::default())?);
    Ok(LiveCurseForgeClient::with_base_url(
        networking,
        "test-key".to_string(),
        server.url(),
    ))
}

fn resolve_args(env: &TestEnvironment, diagnostics: bool) -> ResolveArgs {
    ResolveArgs {
        modlist: env.modlist_path.clone(),
        manifest: env.manifest_path.clone(),
        output: env.output_path.clone(),
        non_interactive: true,
        diagnostics: diagnostics.then(|| env.diagnostics_path.clone()),
    }
}

async fn mock_search(server: &mut ServerGuard, filter: &str, body: String) -> mockito::Mock {
    server
        .mock("GET", "/v1/mods/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("gameId".into(), "432".into()),
            Matcher::UrlEncoded("searchFilter".into(), filter.into()),
        ]))
        .match_header("x-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_files(server: &mut ServerGuard, project_id: u32, body: String) -> mockito::Mock {
    server
        .mock("GET", format!("/v1/mods/{project_id}/files").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn non_interactive_run_fills_manifest_and_diagnostics() -> Result<()> {
    let mut server = Server::new_async().await;
    let env = TestEnvironment::new(&["Create", "ObscureMod123", "Just Enough Items"])?;

    let create_search = mock_search(
        &mut server,
        "Create",
        page_body(vec![
            project_json(328085, "Create Crafts & Additions", 50_000_000),
            project_json(328086, "Create", 120_000_000),
        ]),
    )
    .await;
    let create_files = mock_files(
        &mut server,
        328086,
        page_body(vec![
            file_json(5001, "create-1.20.1-0.5.1.jar", &["1.20.1", "Forge"], "2023-06-01T10:00:00Z", 9_000_000),
            file_json(5002, "create-1.21.1-6.0.0.jar", &["1.21.1", "NeoForge"], "2025-02-01T10:00:00Z", 100_000),
        ]),
    )
    .await;
    let obscure_search = mock_search(&mut server, "ObscureMod123", page_body(vec![])).await;
    let jei_search = mock_search(
        &mut server,
        "Just Enough Items",
        page_body(vec![project_json(238222, "Just Enough Items (JEI)", 400_000_000)]),
    )
    .await;
    let jei_files = mock_files(
        &mut server,
        238222,
        page_body(vec![file_json(
            6001,
            "jei-1.21.1-neoforge-19.21.0.247.jar",
            &["1.21.1", "NeoForge"],
            "2024-09-10T18:22:05.23Z",
            1_523_442,
        )]),
    )
    .await;

    let session = CommandSession::new_with_providers(
        LiveFileSystemProvider,
        MockConfigProvider::new(test_config()),
        false,
    );
    let client = client_for(&server)?;

    let report = handle_resolve(&session, &client, &resolve_args(&env, true)).await?;
    assert_eq!(report.resolved_count(), 2);

    let manifest = env.output_manifest()?;
    assert_eq!(
        manifest["files"],
        json!([
            {"projectID": 328086, "fileID": 5002},
            {"projectID": 238222, "fileID": 6001}
        ])
    );
    assert_eq!(manifest["name"], "E2E Pack");
    assert_eq!(manifest["overrides"], "overrides");

    assert_eq!(
        env.diagnostics()?,
        json!([{"name": "ObscureMod123", "reason": "no_search"}])
    );

    create_search.assert_async().await;
    create_files.assert_async().await;
    obscure_search.assert_async().await;
    jei_search.assert_async().await;
    jei_files.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn failing_request_is_isolated_to_its_mod() -> Result<()> {
    let mut server = Server::new_async().await;
    let env = TestEnvironment::new(&["Flaky", "Sodium"])?;

    let flaky_search = mock_search(&mut server, "Flaky", page_body(vec![project_json(7, "Flaky", 10)])).await;
    let flaky_files = server
        .mock("GET", "/v1/mods/7/files")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;
    mock_search(&mut server, "Sodium", page_body(vec![project_json(394468, "Sodium", 90_000_000)])).await;
    mock_files(
        &mut server,
        394468,
        page_body(vec![file_json(7001, "sodium-neoforge-0.6.0+mc1.21.1.jar", &["1.21.1"], "2024-10-01", 5_000)]),
    )
    .await;

    let session = CommandSession::new_with_providers(
        LiveFileSystemProvider,
        MockConfigProvider::new(test_config()),
        false,
    );
    let client = client_for(&server)?;

    let report = handle_resolve(&session, &client, &resolve_args(&env, true)).await?;
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].name(), "Flaky");
    assert!(!report.results[0].is_resolved());
    assert!(report.results[1].is_resolved());

    assert_eq!(
        env.output_manifest()?["files"],
        json!([{"projectID": 394468, "fileID": 7001}])
    );

    let diagnostics = env.diagnostics()?;
    assert_eq!(diagnostics[0]["name"], "Flaky");
    assert_eq!(diagnostics[0]["reason"], "request_error");
    assert_eq!(diagnostics[0]["projectID"], 7);

    flaky_search.assert_async().await;
    flaky_files.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn empty_mod_list_writes_template_with_empty_files() -> Result<()> {
    let server = Server::new_async().await;
    let env = TestEnvironment::new(&[])?;

    let session = CommandSession::new_with_providers(
        LiveFileSystemProvider,
        MockConfigProvider::new(test_config()),
        false,
    );
    let client = client_for(&server)?;

    let report = handle_resolve(&session, &client, &resolve_args(&env, false)).await?;
    assert!(report.results.is_empty());
    assert_eq!(env.output_manifest()?["files"], json!([]));
    assert!(!env.diagnostics_path.exists());
    assert!(env.root().join("manifest.json").exists());
    Ok(())
}
