use super::*;
use crate::resolve::UnresolvedReason;

#[test]
fn test_parse_mod_list() {
    let requests = parse_mod_list(
        r#"[{"name": "Create"}, {"name": "  Sodium  ", "side": "client"}, {"name": "JEI"}]"#,
    )
    .unwrap();
    let names: Vec<&str> = requests.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Create", "  Sodium  ", "JEI"]);
}

#[test]
fn test_parse_mod_list_drops_nameless_entries() {
    let requests = parse_mod_list(
        r#"[{"name": ""}, {"name": "   "}, {"name": null}, {}, "Create", {"name": 7}, {"name": "Botania"}]"#,
    )
    .unwrap();
    assert_eq!(requests, vec![ModRequest::new("Botania")]);
}

#[test]
fn test_parse_mod_list_keeps_duplicates() {
    let requests = parse_mod_list(r#"[{"name": "Create"}, {"name": "Create"}]"#).unwrap();
    assert_eq!(requests.len(), 2);
}

#[test]
fn test_parse_mod_list_rejects_non_arrays() {
    assert!(matches!(
        parse_mod_list(r#"{"name": "Create"}"#),
        Err(ManifestError::NotAList { found: "an object" })
    ));
    assert!(matches!(
        parse_mod_list("[{"),
        Err(ManifestError::InvalidJson {
            document: "mod list",
            ..
        })
    ));
}

#[test]
fn test_manifest_rejects_non_objects() {
    assert!(matches!(
        Manifest::parse("[]"),
        Err(ManifestError::NotAnObject { found: "an array" })
    ));
    assert!(matches!(
        Manifest::parse("not json"),
        Err(ManifestError::InvalidJson { .. })
    ));
}

#[test]
fn test_with_files_replaces_only_files() {
    let template = r#"{
  "minecraft": {"version": "1.21.1", "modLoaders": [{"id": "neoforge-21.1.77", "primary": true}]},
  "manifestType": "minecraftModpack",
  "files": [{"projectID": 999, "fileID": 999, "required": true}],
  "name": "Example Pack",
  "overrides": "overrides"
}"#;

    let manifest = Manifest::parse(template).unwrap().with_files(&[
        ManifestFile {
            project_id: 1,
            file_id: 11,
        },
        ManifestFile {
            project_id: 1,
            file_id: 11,
        },
    ]);

    assert_eq!(
        manifest.get(FILES_KEY),
        Some(&serde_json::json!([
            {"projectID": 1, "fileID": 11},
            {"projectID": 1, "fileID": 11}
        ]))
    );
    assert_eq!(manifest.get("name"), Some(&Value::from("Example Pack")));
    assert_eq!(
        manifest.get("minecraft").and_then(|m| m.get("version")),
        Some(&Value::from("1.21.1"))
    );
}

#[test]
fn test_with_files_adds_missing_key() {
    let manifest = Manifest::parse(r#"{"name": "Pack"}"#)
        .unwrap()
        .with_files(&[]);
    assert_eq!(manifest.get(FILES_KEY), Some(&serde_json::json!([])));
}

#[test]
fn test_pretty_output_format() {
    let manifest = Manifest::parse(r#"{"name":"Pack","files":[],"version":"1.0.0"}"#)
        .unwrap()
        .with_files(&[ManifestFile {
            project_id: 238222,
            file_id: 5101366,
        }]);

    let text = manifest.to_pretty_string().unwrap();
    let expected = "{\n  \"name\": \"Pack\",\n  \"files\": [\n    {\n      \"projectID\": 238222,\n      \"fileID\": 5101366\n    }\n  ],\n  \"version\": \"1.0.0\"\n}\n";
    assert_eq!(text, expected);
}

#[test]
fn test_diagnostics_json() {
    let entries = [
        Unresolved {
            name: "ObscureMod123".to_string(),
            reason: UnresolvedReason::NoSearchResults,
            project_id: None,
            detail: None,
        },
        Unresolved {
            name: "Create".to_string(),
            reason: UnresolvedReason::NoMatchingFile,
            project_id: Some(328085),
            detail: None,
        },
    ];
    let refs: Vec<&Unresolved> = entries.iter().collect();

    let text = diagnostics_json(&refs).unwrap();
    assert!(text.ends_with("]\n"));
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"name": "ObscureMod123", "reason": "no_search"},
            {"name": "Create", "reason": "no_file", "projectID": 328085}
        ])
    );
}

#[test]
fn test_diagnostics_json_empty() {
    assert_eq!(diagnostics_json(&[]).unwrap(), "[]\n");
}

#[test]
fn test_manifest_file_wire_names() {
    let file: ManifestFile = serde_json::from_str(r#"{"projectID": 1, "fileID": 2}"#).unwrap();
    assert_eq!(
        file,
        ManifestFile {
            project_id: 1,
            file_id: 2
        }
    );
}
