use super::*;
use crate::api::MockCurseForgeClient;
use chrono::TimeZone;

fn file(id: u32, name: &str, versions: &[&str], date: &str, downloads: u64) -> FileCandidate {
    FileCandidate {
        id,
        file_name: name.to_string(),
        display_name: name.trim_end_matches(".jar").to_string(),
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

#[test]
fn test_score_file() {
    let files = create_files();
    assert_eq!(score_file(&files[0], "1.21"), 0);
    assert_eq!(score_file(&files[1], "1.21"), 3);

    let only_versions = file(1, "mod.jar", &["1.21"], "", 0);
    assert_eq!(score_file(&only_versions, "1.21"), GAME_VERSION_MATCH);
    let only_name = file(2, "mod-1.21.jar", &["1.20"], "", 0);
    assert_eq!(score_file(&only_name, "1.21"), FILE_NAME_MATCH);
}

#[test]
fn test_file_timestamp_formats() {
    let midnight = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(file_timestamp("2024-06-01"), Some(midnight));
    assert_eq!(file_timestamp("2024-06-01T00:00:00Z"), Some(midnight));
    assert_eq!(file_timestamp("2024-06-01T02:00:00+02:00"), Some(midnight));
    assert_eq!(file_timestamp("2024-06-01T00:00:00.000"), Some(midnight));
    assert_eq!(
        file_timestamp("2024-06-01T12:34:56.123Z").map(|t| t.timestamp()),
        Some(midnight.timestamp() + 45_296)
    );
    assert_eq!(file_timestamp(""), None);
    assert_eq!(file_timestamp("last tuesday"), None);
}

#[test]
fn test_automatic_prefers_version_match_over_downloads() {
    let files = create_files();
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(11));
}

#[test]
fn test_automatic_later_date_wins_at_equal_score() {
    let files = vec![
        file(1, "a-1.21.jar", &["1.21"], "2024-01-01T00:00:00Z", 9_999),
        file(2, "b-1.21.jar", &["1.21"], "2024-02-01T00:00:00Z", 1),
    ];
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(2));
}

#[test]
fn test_automatic_compares_dates_chronologically() {
    // 10:00+05:00 is 05:00 UTC, an hour before the other file
    let files = vec![
        file(1, "a.jar", &["1.21"], "2024-06-01T10:00:00+05:00", 0),
        file(2, "b.jar", &["1.21"], "2024-06-01T06:00:00Z", 0),
    ];
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(2));
}

#[test]
fn test_automatic_downloads_win_at_equal_score_and_date() {
    let files = vec![
        file(1, "a.jar", &["1.21.1"], "2024-06-01", 10),
        file(2, "b.jar", &["1.21.1"], "2024-06-01", 20),
    ];
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(2));
}

#[test]
fn test_automatic_undated_files_sort_oldest() {
    let files = vec![
        file(1, "a.jar", &["1.21"], "", 1_000),
        file(2, "b.jar", &["1.21"], "2020-01-01", 0),
    ];
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(2));
}

#[test]
fn test_automatic_is_order_independent() {
    let files = vec![
        file(1, "a.jar", &["1.21"], "2024-06-01", 5),
        file(2, "b.jar", &["1.21"], "2024-06-01", 5),
        file(3, "c-1.20.jar", &["1.20"], "2025-01-01", 50),
    ];
    let expected = pick_automatic(&files, "1.21").map(|f| f.id);
    assert_eq!(expected, Some(2));

    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in orders {
        let permuted: Vec<FileCandidate> = order.iter().map(|&i| files[i].clone()).collect();
        assert_eq!(pick_automatic(&permuted, "1.21").map(|f| f.id), expected, "{order:?}");
    }
}

#[test]
fn test_automatic_empty_listing() {
    assert!(pick_automatic(&[], "1.21").is_none());
}

#[test]
fn test_automatic_without_any_match_still_picks() {
    let files = vec![
        file(1, "old.jar", &["1.18"], "2022-01-01", 0),
        file(2, "newer.jar", &["1.19"], "2023-01-01", 0),
    ];
    assert_eq!(pick_automatic(&files, "1.21").map(|f| f.id), Some(2));
}

#[test]
fn test_review_filters_and_sorts_newest_first() {
    let files = vec![
        file(1, "a-1.21.jar", &["1.21"], "2024-01-01", 0),
        file(2, "b-1.20.jar", &["1.20.1"], "2025-01-01", 0),
        file(3, "c.jar", &["1.21.1"], "2024-09-01", 0),
        file(4, "d-1.21.jar", &["1.20"], "2024-03-01", 0),
    ];
    let ids: Vec<u32> = present_for_review(&files, "1.21").iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![3, 4, 1]);
}

#[test]
fn test_review_falls_back_to_full_listing() {
    let files = vec![
        file(1, "a.jar", &["1.18.2"], "2022-01-01", 0),
        file(2, "b.jar", &["1.19.2"], "2023-01-01", 0),
    ];
    let presented = present_for_review(&files, "1.21");
    assert_eq!(presented.len(), files.len());
    assert_eq!(presented[0].id, 2);
}

#[test]
fn test_review_empty_listing() {
    assert!(present_for_review(&[], "1.21").is_empty());
}

#[tokio::test]
async fn test_resolve_files_lists_through_client() {
    let client = MockCurseForgeClient::new()
        .with_files_result(1, Ok(create_files()))
        .await;

    let files = FileResolver::new(&client).resolve_files(1).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(client.calls().await, vec!["files:1".to_string()]);
}
