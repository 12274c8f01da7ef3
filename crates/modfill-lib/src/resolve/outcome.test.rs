use super::*;

#[test]
fn test_reason_wire_names() {
    let json = serde_json::to_string(&[
        UnresolvedReason::NoSearchResults,
        UnresolvedReason::NoMatchingFile,
        UnresolvedReason::SkippedByUser,
        UnresolvedReason::RequestError,
    ])
    .unwrap();
    assert_eq!(json, r#"["no_search","no_file","skipped_by_user","request_error"]"#);
}

#[test]
fn test_unresolved_omits_empty_fields() {
    let request = ModRequest::new("ObscureMod123");
    let result = ResolutionResult::from_outcome(&request, Err(ResolveError::NoSearchResults));

    let ResolutionResult::Unresolved(unresolved) = result else {
        panic!("expected unresolved");
    };
    let value = serde_json::to_value(&unresolved).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"name": "ObscureMod123", "reason": "no_search"})
    );
}

#[test]
fn test_no_file_carries_project_id() {
    let request = ModRequest::new("Create");
    let result = ResolutionResult::from_outcome(
        &request,
        Err(ResolveError::NoMatchingFile {
            project_id: 328085,
            detail: None,
        }),
    );

    let ResolutionResult::Unresolved(unresolved) = result else {
        panic!("expected unresolved");
    };
    assert_eq!(unresolved.reason, UnresolvedReason::NoMatchingFile);
    assert_eq!(unresolved.project_id, Some(328085));
    let value = serde_json::to_value(&unresolved).unwrap();
    assert_eq!(value["projectID"], 328085);
}

#[test]
fn test_request_error_detail_and_project_tag() {
    let err: ResolveError = CurseForgeError::Transport {
        message: "connection reset".to_string(),
    }
    .into();
    assert_eq!(err.project_id(), None);

    let err = err.for_project(12);
    assert_eq!(err.reason(), UnresolvedReason::RequestError);
    assert_eq!(err.project_id(), Some(12));
    assert_eq!(
        err.detail().as_deref(),
        Some("Transport failure: connection reset")
    );
}

#[test]
fn test_for_project_keeps_other_variants() {
    let err = ResolveError::UserSkipped { project_id: None }.for_project(7);
    assert_eq!(err.project_id(), None);
    assert_eq!(err.reason(), UnresolvedReason::SkippedByUser);
}

#[test]
fn test_resolved_outcome() {
    let request = ModRequest::new("Create");
    let result = ResolutionResult::from_outcome(
        &request,
        Ok(Resolution {
            project_id: 1,
            file_id: 11,
            project_name: Some("Create".to_string()),
            file_name: "create-1.21.jar".to_string(),
        }),
    );
    assert!(result.is_resolved());
    assert_eq!(result.name(), "Create");
}
