use super::*;
use crate::api::{FileCandidate, MockCurseForgeClient, ProjectCandidate};
use crate::application::AppConfig;
use crate::application::session_mocks::{MockCommandSession, MockFileSystemProvider};
use crate::display::{DisplayCall, MockDisplayProvider};
use serde_json::{Value, json};

const TEMPLATE: &str = r#"{
  "minecraft": {"version": "1.21.1", "modLoaders": [{"id": "neoforge-21.1.77", "primary": true}]},
  "manifestType": "minecraftModpack",
  "manifestVersion": 1,
  "name": "Example Pack",
  "files": [],
  "overrides": "overrides"
}"#;

fn project(id: u32, name: &str) -> ProjectCandidate {
    ProjectCandidate {
        id,
        name: name.to_string(),
        download_count: 1_000_000,
    }
}

fn file(id: u32, name: &str, versions: &[&str], date: &str, downloads: u64) -> FileCandidate {
    FileCandidate {
        id,
        file_name: name.to_string(),
        display_name: name.to_string(),
        game_versions: versions.iter().map(|v| v.to_string()).collect(),
        file_date: date.to_string(),
        download_count: downloads,
    }
}

async fn fixture_client() -> MockCurseForgeClient {
    MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create")]))
        .await
        .with_files_result(
            1,
            Ok(vec![
                file(10, "create-1.20.jar", &["1.20.1"], "2023-01-01", 500),
                file(11, "create-1.21.jar", &["1.21.1"], "2024-06-01", 100),
            ]),
        )
        .await
        .with_search_result("Broken", Err("connection reset".to_string()))
        .await
}

fn args(non_interactive: bool) -> ResolveArgs {
    ResolveArgs {
        modlist: PathBuf::from("/pack/mods.json"),
        manifest: PathBuf::from("/pack/manifest.json"),
        output: PathBuf::from("/pack/manifest.filled.json"),
        non_interactive,
        diagnostics: None,
    }
}

fn session_with(modlist: &str, filesystem: MockFileSystemProvider) -> MockCommandSession {
    MockCommandSession::new()
        .with_filesystem(
            filesystem
                .with_file("/pack/mods.json", modlist)
                .with_file("/pack/manifest.json", TEMPLATE),
        )
        .with_config(AppConfig {
            request_delay_ms: 0,
            ..AppConfig::default()
        })
}

fn written_manifest(fs: &MockFileSystemProvider) -> Value {
    serde_json::from_str(&fs.contents("/pack/manifest.filled.json").unwrap()).unwrap()
}

#[tokio::test]
async fn test_resolve_non_interactive_writes_manifest() {
    let fs = MockFileSystemProvider::new();
    let session = session_with(
        r#"[{"name": "Create"}, {"name": "ObscureMod123"}, {"name": "Broken"}]"#,
        fs.clone(),
    );
    let client = fixture_client().await;

    let report = handle_resolve(&session, &client, &args(true)).await.unwrap();
    assert_eq!(report.results.len(), 3);

    let manifest = written_manifest(&fs);
    assert_eq!(manifest["files"], json!([{"projectID": 1, "fileID": 11}]));
    assert_eq!(manifest["name"], "Example Pack");
    assert_eq!(manifest["minecraft"]["version"], "1.21.1");

    let text = fs.contents("/pack/manifest.filled.json").unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.starts_with("{\n  \"minecraft\""));
}

#[tokio::test]
async fn test_resolve_prints_and_writes_diagnostics() {
    let fs = MockFileSystemProvider::new();
    let session = session_with(r#"[{"name": "Create"}, {"name": "ObscureMod123"}]"#, fs.clone());
    let client = fixture_client().await;
    let resolve_args = ResolveArgs {
        diagnostics: Some(PathBuf::from("/pack/unresolved.json")),
        ..args(true)
    };

    handle_resolve(&session, &client, &resolve_args).await.unwrap();

    let diagnostics: Value =
        serde_json::from_str(&fs.contents("/pack/unresolved.json").unwrap()).unwrap();
    assert_eq!(
        diagnostics,
        json!([{"name": "ObscureMod123", "reason": "no_search"}])
    );
    assert!(session.display_provider.has_call(&DisplayCall::Section {
        title: "Unresolved entries".to_string()
    }));
    assert!(session.display_provider.has_call(&DisplayCall::Warning {
        message: "Resolve completed with unresolved entries".to_string()
    }));
}

#[tokio::test]
async fn test_resolve_all_resolved_writes_empty_diagnostics() {
    let fs = MockFileSystemProvider::new();
    let session = session_with(r#"[{"name": "Create"}]"#, fs.clone());
    let client = fixture_client().await;
    let resolve_args = ResolveArgs {
        diagnostics: Some(PathBuf::from("/pack/unresolved.json")),
        ..args(true)
    };

    handle_resolve(&session, &client, &resolve_args).await.unwrap();

    assert_eq!(fs.contents("/pack/unresolved.json").as_deref(), Some("[]\n"));
    assert_eq!(session.display_provider.count_calls("section"), 1);
}

#[tokio::test]
async fn test_resolve_interactive_uses_prompts() {
    let fs = MockFileSystemProvider::new();
    // Only the 1.21 file is shown; the 1.20 file is still reachable by id
    let session = session_with(r#"[{"name": "Create"}]"#, fs.clone())
        .with_display(MockDisplayProvider::new().with_responses([Some("1"), Some("10")]));
    let client = fixture_client().await;

    handle_resolve(&session, &client, &args(false)).await.unwrap();

    let manifest = written_manifest(&fs);
    assert_eq!(manifest["files"], json!([{"projectID": 1, "fileID": 10}]));
    assert_eq!(session.display_provider.prompts().len(), 2);
}

#[tokio::test]
async fn test_resolve_interactive_requires_terminal() {
    let fs = MockFileSystemProvider::new();
    let session = session_with(r#"[{"name": "Create"}]"#, fs.clone()).with_interactive_terminal(false);
    let client = fixture_client().await;

    let err = handle_resolve(&session, &client, &args(false))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("--non-interactive"));
    assert!(client.calls().await.is_empty());
    assert!(fs.contents("/pack/manifest.filled.json").is_none());
}

#[tokio::test]
async fn test_resolve_missing_modlist_is_fatal() {
    let session = MockCommandSession::new().with_filesystem(
        MockFileSystemProvider::new().with_file("/pack/manifest.json", TEMPLATE),
    );
    let client = fixture_client().await;

    let err = handle_resolve(&session, &client, &args(true))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Cannot read mod list"));
}

#[tokio::test]
async fn test_resolve_template_must_be_object() {
    let fs = MockFileSystemProvider::new()
        .with_file("/pack/mods.json", r#"[{"name": "Create"}]"#)
        .with_file("/pack/manifest.json", "[]");
    let session = MockCommandSession::new().with_filesystem(fs);
    let client = fixture_client().await;

    let err = handle_resolve(&session, &client, &args(true))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("must be a JSON object"));
    assert!(client.calls().await.is_empty());
}

#[tokio::test]
async fn test_resolve_unwritable_output_is_fatal() {
    let fs = MockFileSystemProvider::new().with_read_only("/pack/manifest.filled.json");
    let session = session_with(r#"[{"name": "Create"}]"#, fs);
    let client = fixture_client().await;

    let err = handle_resolve(&session, &client, &args(true))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Cannot write manifest"));
}

#[tokio::test]
async fn test_search_lists_ranked_candidates() {
    let session = MockCommandSession::new();
    let client = MockCurseForgeClient::new()
        .with_search_result(
            "JEI",
            Ok(vec![project(2, "JEI Integration"), project(1, "JEI")]),
        )
        .await;

    handle_search(&session, &client, "JEI").await.unwrap();

    let listed = session
        .display_provider
        .get_calls()
        .into_iter()
        .find_map(|call| match call {
            DisplayCall::List { items } => Some(items),
            _ => None,
        })
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].starts_with("[1] JEI  (projectID=1"));
    assert!(listed[0].ends_with("similarity 1.00)"));
}

#[tokio::test]
async fn test_search_without_results() {
    let session = MockCommandSession::new();
    let client = MockCurseForgeClient::new();

    handle_search(&session, &client, "Nothing").await.unwrap();
    assert!(session.display_provider.has_call(&DisplayCall::Warning {
        message: "No projects found".to_string()
    }));
}

#[tokio::test]
async fn test_version_command() {
    let session = MockCommandSession::new();
    execute_command_with_session(Commands::Version, &session)
        .await
        .unwrap();

    assert!(session.display_provider.has_call(&DisplayCall::Message {
        text: format!("modfill {}", env!("CARGO_PKG_VERSION"))
    }));
}

#[tokio::test]
async fn test_api_commands_require_key() {
    let session = MockCommandSession::new();
    let err = execute_command_with_session(
        Commands::Search {
            name: "Create".to_string(),
        },
        &session,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Missing API key"));
}
