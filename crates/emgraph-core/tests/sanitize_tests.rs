use emgraph_core::sanitize::{sanitize, sanitize_text};
use emgraph_core::Literal;

#[test]
fn test_published_value_encodings() {
    assert_eq!(sanitize(r#"["2.0"]"#), Literal::Number(2.0));
    assert_eq!(sanitize("[500]"), Literal::Number(500.0));
    assert_eq!(sanitize("1e3"), Literal::Number(1000.0));
}

#[test]
fn test_no_value_markers() {
    for raw in ["[]", "-", r#"["-"]"#, "", "  ", "null"] {
        assert!(sanitize(raw).is_null(), "{raw:?} should be null");
    }
}

#[test]
fn test_output_never_contains_quotes() {
    for raw in [
        r#"["a \"quoted\" name"]"#,
        r#"He said "hi""#,
        r#"\"escaped\""#,
        r#"["1","2","3"]"#,
    ] {
        assert!(!sanitize(raw).to_string().contains('"'), "{raw:?}");
        assert!(!sanitize_text(raw).contains('"'), "{raw:?}");
    }
}

#[test]
fn test_sanitize_is_idempotent_on_text() {
    let once = sanitize(r#"["Power \"subsystem\""]"#);
    let twice = sanitize(&once.to_string());
    assert_eq!(once, twice);
}

#[test]
fn test_non_finite_stays_text() {
    assert_eq!(sanitize("inf"), Literal::text("inf"));
    assert_eq!(sanitize("NaN"), Literal::text("NaN"));
}

#[test]
fn test_surql_rendering() {
    assert_eq!(sanitize("[3.4]").to_surql(), "3.4");
    assert_eq!(sanitize("-").to_surql(), "NULL");
}
