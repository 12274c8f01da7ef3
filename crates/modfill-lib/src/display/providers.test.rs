use super::*;
use crate::display::mock::{DisplayCall, MockDisplayProvider};

#[test]
fn test_operation_summary_states() {
    assert!(OperationSummary::new(3, 0).is_success());
    assert!(OperationSummary::new(2, 1).is_partial_success());
    assert!(OperationSummary::new(0, 4).is_failure());

    let empty = OperationSummary::new(0, 0);
    assert!(!empty.is_success() && !empty.is_partial_success() && !empty.is_failure());
    assert_eq!(OperationSummary::new(2, 1).to_string(), "2 resolved, 1 unresolved");
}

#[test]
fn test_display_summary_partial() {
    let display = MockDisplayProvider::new();
    display.display_summary("Resolve", &OperationSummary::new(2, 1));

    assert!(display.has_call(&DisplayCall::Warning {
        message: "Resolve completed with unresolved entries".to_string()
    }));
    assert_eq!(display.count_calls("subtle"), 1);
}

#[test]
fn test_display_summary_through_trait_object() {
    let display = MockDisplayProvider::new();
    let provider: &dyn DisplayProvider = &display;
    provider.display_summary("Resolve", &OperationSummary::new(1, 0));

    assert!(display.has_call(&DisplayCall::Complete {
        task: "Resolve completed successfully".to_string()
    }));
}

#[test]
fn test_mock_prompt_replays_script() {
    let display = MockDisplayProvider::new().with_responses([Some("2"), None]);

    assert_eq!(display.prompt().input("first"), Some("2".to_string()));
    assert_eq!(display.prompt().input("second"), None);
    // Script exhausted
    assert_eq!(display.prompt().input("third"), None);
    assert_eq!(display.prompts(), vec!["first", "second", "third"]);
    assert_eq!(display.pending_responses(), 0);
}
