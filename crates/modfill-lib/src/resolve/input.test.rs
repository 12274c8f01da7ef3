use super::*;

#[test]
fn test_parse_index_within_listing() {
    assert_eq!(parse_selection("1", 6), SelectionInput::Index(0));
    assert_eq!(parse_selection(" 6 ", 6), SelectionInput::Index(5));
}

#[test]
fn test_parse_raw_id_outside_listing() {
    assert_eq!(parse_selection("7", 6), SelectionInput::RawId(7));
    assert_eq!(parse_selection("328085", 6), SelectionInput::RawId(328085));
    // With fewer candidates listed the boundary moves
    assert_eq!(parse_selection("3", 2), SelectionInput::RawId(3));
}

#[test]
fn test_parse_skip_any_case() {
    assert_eq!(parse_selection("s", 6), SelectionInput::Skip);
    assert_eq!(parse_selection("S", 6), SelectionInput::Skip);
    assert_eq!(parse_selection("  s\n", 6), SelectionInput::Skip);
}

#[test]
fn test_parse_blank() {
    assert_eq!(parse_selection("", 6), SelectionInput::Blank);
    assert_eq!(parse_selection("   \n", 6), SelectionInput::Blank);
}

#[test]
fn test_parse_invalid() {
    for raw in ["0", "-3", "+3", "skip", "1.5", "abc", "99999999999"] {
        assert_eq!(
            parse_selection(raw, 6),
            SelectionInput::Invalid(raw.to_string()),
            "{raw:?}"
        );
    }
}
