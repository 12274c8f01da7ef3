use super::*;
use crate::api::MockCurseForgeClient;

fn project(id: u32, name: &str, downloads: u64) -> ProjectCandidate {
    ProjectCandidate {
        id,
        name: name.to_string(),
        download_count: downloads,
    }
}

fn ids(ranked: &[RankedProject]) -> Vec<u32> {
    ranked.iter().map(|r| r.candidate.id).collect()
}

#[test]
fn test_rank_by_similarity_first() {
    let ranked = rank_projects(
        "Create",
        vec![
            project(1, "Botania", 90_000_000),
            project(2, "Create Crafts & Additions", 20_000_000),
            project(3, "Create", 100_000),
        ],
    );
    assert_eq!(ids(&ranked), vec![3, 2, 1]);
    assert_eq!(ranked[0].similarity, 1.0);
}

#[test]
fn test_rank_ties_broken_by_downloads() {
    let ranked = rank_projects(
        "JEI",
        vec![
            project(10, "jei", 5),
            project(11, "JEI", 500),
            project(12, "Jei", 50),
        ],
    );
    assert_eq!(ids(&ranked), vec![11, 12, 10]);
}

#[test]
fn test_rank_full_ties_keep_service_order() {
    let ranked = rank_projects(
        "Sodium",
        vec![project(7, "Sodium", 10), project(3, "sodium", 10)],
    );
    assert_eq!(ids(&ranked), vec![7, 3]);
}

#[test]
fn test_rank_empty() {
    assert!(rank_projects("Anything", Vec::new()).is_empty());
}

#[tokio::test]
async fn test_resolve_projects_uses_config() {
    let client = MockCurseForgeClient::new()
        .with_search_result(
            "Create",
            Ok(vec![
                project(2, "Create: Above and Beyond", 3_000_000),
                project(1, "Create", 1_000_000),
            ]),
        )
        .await;
    let config = ResolverConfig::default();

    let ranked = ProjectResolver::new(&client, &config)
        .resolve_projects("Create")
        .await
        .unwrap();
    assert_eq!(ids(&ranked), vec![1, 2]);
}

#[tokio::test]
async fn test_resolve_projects_propagates_errors() {
    let client = MockCurseForgeClient::new()
        .with_search_result("Create", Err("rate limited".to_string()))
        .await;
    let config = ResolverConfig::default();

    let result = ProjectResolver::new(&client, &config)
        .resolve_projects("Create")
        .await;
    assert!(matches!(result, Err(CurseForgeError::Transport { .. })));
}
