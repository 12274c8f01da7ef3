use super::*;

#[test]
fn test_plain_styling_has_no_escapes() {
    let styling = StyleManager::new(false);
    assert_eq!(styling.format_success("Create"), "+ Create");
    assert_eq!(styling.format_error("JEI: no_search"), "x JEI: no_search");
    assert_eq!(styling.format_working("Processing"), "> Processing");
    assert_eq!(styling.bullet(), "*");
}

#[test]
fn test_color_styling_wraps_symbols() {
    let styling = StyleManager::new(true);
    let formatted = styling.format_success("Create");
    assert!(formatted.contains('\u{1b}'));
    assert!(formatted.ends_with(" Create"));
    assert!(formatted.contains("✓"));
}
