//! Value sanitizer.
//!
//! Exported values arrive as loosely encoded strings: published values look
//! like `["3.4"]`, an empty value array is `[]` and a "no value" cell is `-`.
//! Everything that ends up inside a statement goes through here first.

use crate::model::Literal;

/// Sentinel cells that mean "no value".
const NULL_MARKERS: &[&str] = &["", "-", "[]", "[-]", "null"];

/// Normalize a raw value-array encoding into a literal.
///
/// Quote characters are stripped, sentinel markers become [`Literal::Null`]
/// and a bracket-wrapped number such as `[3.4]` becomes `3.4`. Anything that
/// does not resolve is returned as quote-free text. Never fails.
pub fn sanitize(raw: &str) -> Literal {
    let stripped = strip_quotes(raw);
    let value = stripped.trim();

    if is_null_marker(value) {
        return Literal::Null;
    }

    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let inner = inner.trim();
        if is_null_marker(inner) {
            return Literal::Null;
        }
        return match parse_number(inner) {
            Some(n) => Literal::Number(n),
            None => Literal::Text(value.to_string()),
        };
    }

    match parse_number(value) {
        Some(n) => Literal::Number(n),
        None => Literal::Text(value.to_string()),
    }
}

/// Strip quote characters from free text. Used for names, descriptions and
/// other fields that are never numeric encodings.
pub fn sanitize_text(raw: &str) -> String {
    strip_quotes(raw)
}

fn strip_quotes(raw: &str) -> String {
    raw.replace("\\\"", "").replace('"', "")
}

fn is_null_marker(value: &str) -> bool {
    NULL_MARKERS.iter().any(|m| m.eq_ignore_ascii_case(value))
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_number() {
        assert_eq!(sanitize("[3.4]"), "3.4");
        assert_eq!(sanitize("[3.4]"), Literal::Number(3.4));
    }

    #[test]
    fn test_quoted_bracketed_number() {
        assert_eq!(sanitize(r#"["3.4"]"#), Literal::Number(3.4));
        assert_eq!(sanitize(r#"[\"500\"]"#), Literal::Number(500.0));
    }

    #[test]
    fn test_empty_list_is_null() {
        assert!(sanitize("[]").is_null());
        assert!(sanitize("[ ]").is_null());
    }

    #[test]
    fn test_sentinel_markers_are_null() {
        assert!(sanitize(r#"["-"]"#).is_null());
        assert!(sanitize("-").is_null());
        assert!(sanitize("").is_null());
    }

    #[test]
    fn test_negative_numbers_survive() {
        assert_eq!(sanitize("[-12.5]"), Literal::Number(-12.5));
        assert_eq!(sanitize("-3"), Literal::Number(-3.0));
    }

    #[test]
    fn test_quotes_removed_from_text() {
        let out = sanitize(r#"He said "hi""#);
        assert_eq!(out, Literal::text("He said hi"));
        assert!(!out.to_string().contains('"'));
        assert!(!sanitize_text(r#"He said \"hi\""#).contains('"'));
    }

    #[test]
    fn test_multi_value_array_passes_through() {
        assert_eq!(sanitize(r#"["1","2"]"#), Literal::text("[1,2]"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize("kilogram"), Literal::text("kilogram"));
        assert_eq!(sanitize_text("mass margin"), "mass margin");
    }
}
