use super::*;

#[test]
fn test_filter_directive_scopes_http_crates() {
    let directive = filter_directive(LogLevel::Debug);
    assert!(directive.starts_with("modfill_lib=debug,"));
    assert!(directive.contains("reqwest=warn"));
    assert!(directive.ends_with(",debug"));
    // Must parse as a valid filter
    let _ = EnvFilter::new(directive);
}

#[test]
fn test_logger_not_initialized_initially() {
    // Other tests in this binary never install the global subscriber
    assert!(!Logger::is_initialized() || Logger::global().is_some());
}
