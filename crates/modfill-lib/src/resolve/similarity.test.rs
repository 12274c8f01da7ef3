use super::*;

const NAMES: &[&str] = &[
    "Create",
    "create",
    "Create: Above and Beyond",
    "Create Crafts & Additions",
    "Just Enough Items (JEI)",
    "JEI",
    "Botania",
    "Sodium",
    "",
];

#[test]
fn test_similarity_reflexive() {
    for name in NAMES {
        assert_eq!(similarity(name, name), 1.0, "similarity({name:?}, {name:?})");
    }
}

#[test]
fn test_similarity_symmetric() {
    for a in NAMES {
        for b in NAMES {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_similarity_range() {
    for a in NAMES {
        for b in NAMES {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} = {score}");
        }
    }
}

#[test]
fn test_similarity_case_insensitive() {
    assert_eq!(similarity("SODIUM", "sodium"), 1.0);
}

#[test]
fn test_similarity_known_ratios() {
    // 18 insertions over 24 characters
    assert!((similarity("Create", "Create: Above and Beyond") - 0.25).abs() < 1e-9);
    // "abcd" vs "acbd": two substitutions
    assert!((similarity("abcd", "acbd") - 0.5).abs() < 1e-9);
    assert_eq!(similarity("abc", "xyz"), 0.0);
    assert_eq!(similarity("", "abc"), 0.0);
}

#[test]
fn test_similarity_prefers_related_names() {
    let related = similarity("Create", "Create Crafts & Additions");
    let unrelated = similarity("Create", "Botania");
    assert!(related > unrelated, "{related} <= {unrelated}");
}

#[test]
fn test_similarity_tolerates_punctuation_and_plurals() {
    assert!(similarity("Waystone", "Waystones") > 0.85);
    assert!(similarity("Steam n Rails", "Steam 'n' Rails") > 0.85);
}
