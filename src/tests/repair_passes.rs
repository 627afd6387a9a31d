use super::*;
use serde_json::json;

fn parse(s: &str) -> serde_json::Value {
    crate::parse_lenient(s, &ParseOptions::default()).unwrap()
}

#[test]
fn valid_json_passes_straight_through() {
    assert_eq!(parse(r#"{"a":1,"b":[true,null]}"#), json!({"a":1,"b":[true,null]}));
}

#[test]
fn normalization_alone_repairs_fancy_input() {
    let s = "\u{FEFF}{\u{201C}a\u{201D}: 1}\u{200B}";
    assert_eq!(parse(s), json!({"a": 1}));
}

#[test]
fn line_and_block_comments_are_stripped() {
    let s = "// header\n{\"a\": 1, /* mid */ \"b\": 2} // tail";
    assert_eq!(parse(s), json!({"a":1,"b":2}));
}

#[test]
fn comment_markers_inside_strings_survive() {
    let s = r#"{"a": "http://not-a-comment"}"#;
    assert_eq!(parse(s), json!({"a": "http://not-a-comment"}));
}

#[test]
fn comment_markers_inside_strings_survive_even_with_real_comments() {
    // Forces pass 2: the real comment must go, the in-string one must stay.
    let s = "{\"url\": \"http://x/*y*/z\"} /* real */";
    assert_eq!(parse(s), json!({"url": "http://x/*y*/z"}));
}

#[test]
fn escaped_quote_does_not_end_string_tracking() {
    let s = "{\"a\": \"say \\\"hi\\\" // here\"} // comment";
    assert_eq!(parse(s), json!({"a": "say \"hi\" // here"}));
}

#[test]
fn trailing_commas_in_objects_and_arrays() {
    assert_eq!(parse(r#"{"a":1,"b":2,}"#), json!({"a":1,"b":2}));
    assert_eq!(parse("[1,2,]"), json!([1, 2]));
    assert_eq!(parse("[1,2, \n ]"), json!([1, 2]));
}

#[test]
fn comments_and_trailing_commas_combined() {
    let s = "{\n  \"a\": 1, // one\n  \"b\": [2, 3,], /* two */\n}";
    assert_eq!(parse(s), json!({"a":1,"b":[2,3]}));
}

#[test]
fn pass_one_wins_over_later_passes() {
    // Valid as-is; a string-unaware comment strip or comma strip would
    // mutate these values, so pass 1's result must be returned untouched.
    assert_eq!(parse(r#"{"u":"//x"}"#), json!({"u": "//x"}));
    assert_eq!(parse(r#"["a,]"]"#), json!(["a,]"]));
}

#[test]
fn unrepairable_input_reports_final_pass_error() {
    let err = crate::parse_lenient(r#"{"a": }"#, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::Unrepairable { .. }));
    assert!(err.to_string().contains("invalid JSON after repair"));
}

#[test]
fn comment_pass_can_be_disabled() {
    let opts = ParseOptions {
        strip_comments: false,
        ..Default::default()
    };
    assert!(crate::parse_lenient("{\"a\":1} // c", &opts).is_err());
    // Trailing commas are still handled by the remaining pass.
    assert_eq!(
        crate::parse_lenient(r#"{"a":1,}"#, &opts).unwrap(),
        json!({"a":1})
    );
}

#[test]
fn trailing_comma_pass_can_be_disabled() {
    let opts = ParseOptions {
        strip_trailing_commas: false,
        ..Default::default()
    };
    assert!(crate::parse_lenient("[1,2,]", &opts).is_err());
}

#[test]
fn smart_quote_mapping_can_be_disabled() {
    let opts = ParseOptions {
        normalize_quotes: false,
        ..Default::default()
    };
    let s = "{\u{201C}a\u{201D}: 1}";
    assert!(crate::parse_lenient(s, &opts).is_err());
    assert_eq!(
        crate::parse_lenient(s, &ParseOptions::default()).unwrap(),
        json!({"a": 1})
    );
}

#[test]
fn unterminated_block_comment_swallows_tail() {
    // The body closes before the comment opens, so the value survives.
    assert_eq!(parse("[1,2] /* never closed"), json!([1, 2]));
}
