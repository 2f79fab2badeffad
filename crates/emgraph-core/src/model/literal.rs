//! Typed attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar attribute value, ready to be embedded in a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Literal {
    pub fn text(value: impl Into<String>) -> Self {
        Literal::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value.
    ///
    /// Text is accepted when it holds a plain or bracket-wrapped number,
    /// which is how published values come back from a string-typed store.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(s) => {
                let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']').trim();
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Boolean view of the value. Booleans are stored quoted, so both
    /// `true` and `"True"` read back as `Some(true)`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            Literal::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Render as a SurrealQL value.
    ///
    /// Numbers are unquoted, booleans and text are quoted.
    pub fn to_surql(&self) -> String {
        match self {
            Literal::Null => "NULL".to_string(),
            Literal::Bool(b) => quote(if *b { "true" } else { "false" }),
            Literal::Number(n) => format_number(*n),
            Literal::Text(s) => quote(s),
        }
    }

    /// Convert a JSON value read back from the graph.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Literal::Null),
            serde_json::Value::Bool(b) => Some(Literal::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(Literal::Number),
            serde_json::Value::String(s) => Some(Literal::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<&str> for Literal {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Double-quote a string for SurrealQL, escaping backslashes and quotes.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
