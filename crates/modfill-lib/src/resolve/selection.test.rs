use super::*;
use crate::api::{CurseForgeError, MockCurseForgeClient, ProjectCandidate};
use crate::display::{DisplayCall, MockDisplayProvider};
use crate::resolve::outcome::UnresolvedReason;

fn project(id: u32, name: &str, downloads: u64) -> ProjectCandidate {
    ProjectCandidate {
        id,
        name: name.to_string(),
        download_count: downloads,
    }
}

fn ranked(id: u32, name: &str) -> RankedProject {
    RankedProject {
        candidate: project(id, name, 0),
        similarity: 1.0,
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

fn create_files() -> Vec<FileCandidate> {
    vec![
        file(10, "create-1.20.jar", &["1.20.1"], "2023-01-01", 500),
        file(11, "create-1.21.jar", &["1.21.1"], "2024-06-01", 100),
    ]
}

async fn create_client() -> MockCurseForgeClient {
    MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create", 1_000_000)]))
        .await
        .with_files_result(1, Ok(create_files()))
        .await
}

// decide_project

#[test]
fn test_decide_project_by_index() {
    let shown = vec![ranked(1, "Create"), ranked(2, "Create Deco")];
    assert_eq!(
        decide_project(Some("2"), &shown),
        ProjectDecision::Chosen {
            project_id: 2,
            project_name: Some("Create Deco".to_string()),
        }
    );
}

#[test]
fn test_decide_project_raw_id_bypasses_list() {
    let shown = vec![ranked(1, "Create")];
    assert_eq!(
        decide_project(Some("328085"), &shown),
        ProjectDecision::Chosen {
            project_id: 328085,
            project_name: None,
        }
    );
}

#[test]
fn test_decide_project_skips_on_blank_skip_invalid_and_closed_input() {
    let shown = vec![ranked(1, "Create")];
    for answer in [Some(""), Some("s"), Some("S"), Some("first"), Some("0"), None] {
        assert_eq!(
            decide_project(answer, &shown),
            ProjectDecision::Skipped,
            "{answer:?}"
        );
    }
}

// decide_file

#[test]
fn test_decide_file_blank_and_invalid_pick_first_shown() {
    let listing = create_files();
    let shown: Vec<&FileCandidate> = vec![&listing[1], &listing[0]];
    for answer in ["", "  ", "latest", "-1"] {
        assert_eq!(
            decide_file(Some(answer), &shown, &listing),
            FileDecision::Chosen(&listing[1]),
            "{answer:?}"
        );
    }
}

#[test]
fn test_decide_file_index_and_skip() {
    let listing = create_files();
    let shown: Vec<&FileCandidate> = vec![&listing[1], &listing[0]];
    assert_eq!(
        decide_file(Some("2"), &shown, &listing),
        FileDecision::Chosen(&listing[0])
    );
    // `s` at the file prompt means "take the default", like a blank answer
    assert_eq!(
        decide_file(Some("s"), &shown, &listing),
        FileDecision::Chosen(&listing[1])
    );
    assert_eq!(
        decide_file(Some("S"), &shown, &listing),
        FileDecision::Chosen(&listing[1])
    );
    assert_eq!(decide_file(None, &shown, &listing), FileDecision::Skipped);
}

#[test]
fn test_decide_file_raw_id_searches_full_listing() {
    let listing = create_files();
    // Only the 1.21 file was shown; the 1.20 file is still selectable by id
    let shown: Vec<&FileCandidate> = vec![&listing[1]];
    assert_eq!(
        decide_file(Some("10"), &shown, &listing),
        FileDecision::Chosen(&listing[0])
    );
    assert_eq!(
        decide_file(Some("99"), &shown, &listing),
        FileDecision::NotListed(99)
    );
}

#[test]
fn test_decide_file_nothing_shown() {
    assert_eq!(decide_file(Some(""), &[], &[]), FileDecision::NoCandidates);
}

// AutomaticStrategy

#[tokio::test]
async fn test_automatic_scenario_create() {
    let client = create_client().await;
    let config = ResolverConfig::default();

    let resolution = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap();
    assert_eq!(resolution.project_id, 1);
    assert_eq!(resolution.file_id, 11);
    assert_eq!(resolution.project_name.as_deref(), Some("Create"));
}

#[tokio::test]
async fn test_automatic_picks_best_ranked_project() {
    let client = MockCurseForgeClient::new()
        .with_search_result(
            "Sodium",
            Ok(vec![
                project(5, "Sodium Extra", 50_000_000),
                project(6, "Sodium", 40_000_000),
            ]),
        )
        .await
        .with_files_result(6, Ok(vec![file(60, "sodium-1.21.jar", &["1.21"], "2024-07-01", 1)]))
        .await;
    let config = ResolverConfig::default();

    let resolution = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("Sodium"))
        .await
        .unwrap();
    assert_eq!((resolution.project_id, resolution.file_id), (6, 60));
    assert_eq!(
        client.calls().await,
        vec!["search:Sodium".to_string(), "files:6".to_string()]
    );
}

#[tokio::test]
async fn test_automatic_no_search_results() {
    let client = MockCurseForgeClient::new();
    let config = ResolverConfig::default();

    let err = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("ObscureMod123"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::NoSearchResults);
    assert_eq!(client.calls().await, vec!["search:ObscureMod123".to_string()]);
}

#[tokio::test]
async fn test_automatic_empty_listing_is_no_file() {
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create", 1)]))
        .await;
    let config = ResolverConfig::default();

    let err = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::NoMatchingFile);
    assert_eq!(err.project_id(), Some(1));
}

#[tokio::test]
async fn test_automatic_listing_failure_is_tagged_with_project() {
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create", 1)]))
        .await
        .with_files_result(1, Err("connection reset".to_string()))
        .await;
    let config = ResolverConfig::default();

    let err = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Request {
            project_id: Some(1),
            source: CurseForgeError::Transport { .. }
        }
    ));
}

#[tokio::test]
async fn test_automatic_uses_configured_target() {
    let client = create_client().await;
    let config = ResolverConfig {
        target_version: "1.20".to_string(),
        ..ResolverConfig::default()
    };

    let resolution = AutomaticStrategy::new(&client, &config)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap();
    assert_eq!(resolution.file_id, 10);
}

// InteractiveStrategy

#[tokio::test]
async fn test_interactive_defaults_to_first_presented_file() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("1"), Some("")]);

    let resolution = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap();
    assert_eq!((resolution.project_id, resolution.file_id), (1, 11));
    assert_eq!(display.prompts().len(), 2);
    assert!(display.has_call(&DisplayCall::Section {
        title: "Candidates for 'Create'".to_string()
    }));
}

#[tokio::test]
async fn test_interactive_blank_project_answer_skips() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("")]);

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::SkippedByUser);
    assert_eq!(err.project_id(), None);
    // No file listing after a skip
    assert_eq!(client.calls().await, vec!["search:Create".to_string()]);
}

#[tokio::test]
async fn test_interactive_raw_project_id() {
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create", 1)]))
        .await
        .with_files_result(328085, Ok(vec![file(900, "addon-1.21.jar", &["1.21"], "2024-01-01", 0)]))
        .await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("328085"), Some("1")]);

    let resolution = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap();
    assert_eq!((resolution.project_id, resolution.file_id), (328085, 900));
    assert_eq!(resolution.project_name, None);
}

#[tokio::test]
async fn test_interactive_unknown_file_id_is_no_file() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("1"), Some("424242")]);

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::NoMatchingFile);
    assert_eq!(err.project_id(), Some(1));
    assert!(err.detail().unwrap().contains("424242"));
}

#[tokio::test]
async fn test_interactive_file_skip_takes_first_shown() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("1"), Some("s")]);

    let resolution = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap();
    assert_eq!(resolution.project_id, 1);
    assert_eq!(resolution.file_id, 11);
}

#[tokio::test]
async fn test_interactive_closed_input_at_file_prompt_skips() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("1"), None]);

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::SkippedByUser);
    assert_eq!(err.project_id(), Some(1));
}

#[tokio::test]
async fn test_interactive_empty_listing_never_prompts_for_file() {
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Ok(vec![project(1, "Create", 1)]))
        .await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("1"), Some("1")]);

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::NoMatchingFile);
    assert_eq!(display.prompts().len(), 1);
    assert_eq!(display.pending_responses(), 1);
}

#[tokio::test]
async fn test_interactive_no_search_results_never_prompts() {
    let client = MockCurseForgeClient::new();
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new();

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("ObscureMod123"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), UnresolvedReason::NoSearchResults);
    assert!(display.prompts().is_empty());
}

#[tokio::test]
async fn test_interactive_lists_at_most_limit_candidates() {
    let candidates: Vec<ProjectCandidate> = (1..=9)
        .map(|i| project(i, &format!("Create Addon {i}"), u64::from(i)))
        .collect();
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Ok(candidates))
        .await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("s")]);

    let _ = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await;

    let listed = display.get_calls().into_iter().find_map(|call| match call {
        DisplayCall::List { items } => Some(items),
        _ => None,
    });
    let listed = listed.unwrap();
    assert_eq!(listed.len(), config.listing_limit);
    // Equal similarity, so the most downloaded addon leads
    assert!(listed[0].starts_with("[1] Create Addon 9"));
}

#[tokio::test]
async fn test_interactive_index_seven_beyond_listing_is_raw_id() {
    let client = create_client().await;
    let config = ResolverConfig::default();
    let display = MockDisplayProvider::new().with_responses([Some("7"), Some("")]);

    let err = InteractiveStrategy::new(&client, &config, &display)
        .select(&ModRequest::new("Create"))
        .await
        .unwrap_err();
    // Project 7 has no files in the fixture
    assert_eq!(err.reason(), UnresolvedReason::NoMatchingFile);
    assert_eq!(err.project_id(), Some(7));
}
