// Tests for CurseForge API client

use super::*;
use crate::networking::NetworkingConfig;
use mockito::{Matcher, Server};

fn live_client(base_url: String) -> LiveCurseForgeClient {
    let networking = Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap());
    LiveCurseForgeClient::with_base_url(networking, "test-key".to_string(), base_url)
}

fn project(id: u32, name: &str, downloads: u64) -> ProjectCandidate {
    ProjectCandidate {
        id,
        name: name.to_string(),
        download_count: downloads,
    }
}

// ============================================================================
// Wire Format Tests
// ============================================================================

#[test]
fn test_file_candidate_from_api_json() {
    let json = r#"{
        "id": 5432101,
        "gameId": 432,
        "modId": 238222,
        "isAvailable": true,
        "displayName": "jei-1.21.1-neoforge-19.21.0.247.jar",
        "fileName": "jei-1.21.1-neoforge-19.21.0.247.jar",
        "fileDate": "2024-09-10T18:22:05.23Z",
        "downloadCount": 1523442,
        "gameVersions": ["1.21.1", "NeoForge"]
    }"#;

    let file: FileCandidate = serde_json::from_str(json).unwrap();
    assert_eq!(file.id, 5432101);
    assert_eq!(file.game_versions, vec!["1.21.1", "NeoForge"]);
    assert_eq!(file.file_date, "2024-09-10T18:22:05.23Z");
    assert_eq!(file.download_count, 1523442);
}

#[test]
fn test_download_count_accepts_float_and_null() {
    let float: ProjectCandidate =
        serde_json::from_str(r#"{"id": 1, "name": "Create", "downloadCount": 1.5E8}"#).unwrap();
    assert_eq!(float.download_count, 150_000_000);

    let null: ProjectCandidate =
        serde_json::from_str(r#"{"id": 2, "name": "Create", "downloadCount": null}"#).unwrap();
    assert_eq!(null.download_count, 0);

    let missing: FileCandidate = serde_json::from_str(r#"{"id": 3}"#).unwrap();
    assert_eq!(missing.download_count, 0);
    assert!(missing.game_versions.is_empty());
    assert!(missing.file_date.is_empty());
}

// ============================================================================
// Mock Client Tests
// ============================================================================

#[tokio::test]
async fn test_mock_search_success() {
    let mock = MockCurseForgeClient::new()
        .with_search_result("jei", Ok(vec![project(238222, "Just Enough Items (JEI)", 425_789_012)]))
        .await;

    let result = mock.search(MINECRAFT_GAME_ID, "jei", 10).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 238222);
    assert_eq!(mock.calls().await, vec!["search:jei".to_string()]);
}

#[tokio::test]
async fn test_mock_search_unknown_filter_is_empty() {
    let mock = MockCurseForgeClient::new();
    let result = mock.search(MINECRAFT_GAME_ID, "nonexistent", 10).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_mock_files_error() {
    let mock = MockCurseForgeClient::new()
        .with_files_result(42, Err("connection reset".to_string()))
        .await;

    let result = mock.list_files(42).await;
    assert!(matches!(
        result,
        Err(CurseForgeError::Transport { ref message }) if message == "connection reset"
    ));
}

// ============================================================================
// Live Client Tests (mockito)
// ============================================================================

#[tokio::test]
async fn test_live_search_sends_key_and_encodes_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/mods/search")
        .match_header("x-api-key", "test-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("gameId".into(), "432".into()),
            Matcher::UrlEncoded("searchFilter".into(), "Create: Steam 'n' Rails".into()),
            Matcher::UrlEncoded("pageSize".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":[{"id":688231,"name":"Create: Steam 'n' Rails","downloadCount":9000000}],
                "pagination":{"index":0,"pageSize":10,"resultCount":1,"totalCount":1}}"#,
        )
        .create_async()
        .await;

    let client = live_client(server.url());
    let results = client
        .search(MINECRAFT_GAME_ID, "Create: Steam 'n' Rails", 10)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(results, vec![project(688231, "Create: Steam 'n' Rails", 9_000_000)]);
}

#[test]
fn test_from_config_requires_key() {
    let missing = LiveCurseForgeClient::from_config(CurseForgeConfig::default());
    assert!(matches!(missing, Err(CurseForgeError::MissingApiKey)));

    let blank = LiveCurseForgeClient::from_config(CurseForgeConfig {
        api_key: Some("  ".to_string()),
        ..CurseForgeConfig::default()
    });
    assert!(matches!(blank, Err(CurseForgeError::MissingApiKey)));
}

#[test]
fn test_from_config_rejects_zero_timeout() {
    let result = LiveCurseForgeClient::from_config(CurseForgeConfig {
        api_key: Some("test-key".to_string()),
        networking: NetworkingConfig {
            timeout_seconds: 0,
            ..NetworkingConfig::default()
        },
        ..CurseForgeConfig::default()
    });
    assert!(matches!(result, Err(CurseForgeError::Networking { .. })));
}

#[tokio::test]
async fn test_from_config_uses_base_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/mods/7/files")
        .match_query(Matcher::Any)
        .match_header("x-api-key", "from-config")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = LiveCurseForgeClient::from_config(CurseForgeConfig {
        base_url: format!("{}/", server.url()),
        api_key: Some("from-config".to_string()),
        ..CurseForgeConfig::default()
    })
    .unwrap();
    let files = client.list_files(7).await.unwrap();

    mock.assert_async().await;
    assert!(files.is_empty());
}

#[tokio::test]
async fn test_live_search_rejects_oversized_page() {
    let client = live_client("http://127.0.0.1:9".to_string());
    let result = client.search(MINECRAFT_GAME_ID, "jei", 51).await;
    assert!(matches!(
        result,
        Err(CurseForgeError::InvalidSearchParams { .. })
    ));
}

#[tokio::test]
async fn test_live_search_http_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/mods/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let client = live_client(server.url());
    let result = client.search(MINECRAFT_GAME_ID, "jei", 10).await;
    assert!(matches!(
        result,
        Err(CurseForgeError::HttpStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_live_list_files_follows_pagination() {
    let mut server = Server::new_async().await;

    let first_page: Vec<String> = (0..50)
        .map(|i| format!(r#"{{"id":{},"fileName":"mod-{}.jar"}}"#, 1000 + i, i))
        .collect();
    let first = server
        .mock("GET", "/v1/mods/77/files")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("index".into(), "0".into()),
            Matcher::UrlEncoded("pageSize".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"data":[{}],"pagination":{{"index":0,"pageSize":50,"resultCount":50,"totalCount":52}}}}"#,
            first_page.join(",")
        ))
        .create_async()
        .await;
    let second = server
        .mock("GET", "/v1/mods/77/files")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("index".into(), "50".into()),
            Matcher::UrlEncoded("pageSize".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data":[{"id":2000,"fileName":"a.jar"},{"id":2001,"fileName":"b.jar"}],
                "pagination":{"index":50,"pageSize":50,"resultCount":2,"totalCount":52}}"#,
        )
        .create_async()
        .await;

    let client = live_client(server.url());
    let files = client.list_files(77).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(files.len(), 52);
    assert_eq!(files.last().map(|f| f.id), Some(2001));
}

#[tokio::test]
async fn test_live_list_files_malformed_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/mods/5/files")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = live_client(server.url());
    let result = client.list_files(5).await;
    assert!(matches!(result, Err(CurseForgeError::JsonError { .. })));
}
