//! Input records and typed field access.

use serde_json::{Map, Value};

use super::error::TemplateError;

/// One exported domain object.
///
/// The envelope (`classKind`, `iid`, `revisionNumber`, `modifiedOn`) is
/// validated up front; class-specific fields are read on demand by the
/// template, which knows which of them are required.
#[derive(Debug, Clone)]
pub struct Record {
    class_kind: String,
    iid: String,
    revision_number: f64,
    modified_on: Option<String>,
    fields: Map<String, Value>,
}

impl Record {
    /// Validate the envelope of a raw JSON value.
    pub fn from_value(value: Value) -> Result<Self, TemplateError> {
        let Value::Object(fields) = value else {
            return Err(TemplateError::NotAnObject);
        };

        let class_kind = fields
            .get("classKind")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(TemplateError::Envelope { field: "classKind" })?;
        let iid = fields
            .get("iid")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.is_empty())
            .ok_or(TemplateError::Envelope { field: "iid" })?;
        let revision_number = fields
            .get("revisionNumber")
            .and_then(Value::as_f64)
            .ok_or(TemplateError::Envelope {
                field: "revisionNumber",
            })?;
        let modified_on = fields
            .get("modifiedOn")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            class_kind,
            iid,
            revision_number,
            modified_on,
            fields,
        })
    }

    pub fn class_kind(&self) -> &str {
        &self.class_kind
    }

    pub fn iid(&self) -> &str {
        &self.iid
    }

    pub fn revision_number(&self) -> f64 {
        self.revision_number
    }

    pub fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    /// Raw field value. Absent and `null` both read as `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// A scalar rendered as text. Numbers and booleans are stringified.
    pub fn text(&self, field: &str) -> Result<Option<String>, TemplateError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    pub fn number(&self, field: &str) -> Result<Option<f64>, TemplateError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.invalid(field, "a number")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| self.invalid(field, "a finite number")),
            Some(_) => Err(self.invalid(field, "a number")),
        }
    }

    pub fn flag(&self, field: &str) -> Result<Option<bool>, TemplateError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(self.invalid(field, "a boolean")),
            },
            Some(_) => Err(self.invalid(field, "a boolean")),
        }
    }

    /// A single identifier. Empty strings count as absent.
    pub fn id(&self, field: &str) -> Result<Option<String>, TemplateError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(_) => Err(self.invalid(field, "an identifier string")),
        }
    }

    /// An unordered list of strings. Absent or null reads as empty.
    pub fn strings(&self, field: &str) -> Result<Vec<String>, TemplateError> {
        match self.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    _ => Err(self.invalid(field, "a list of strings")),
                })
                .collect(),
            Some(_) => Err(self.invalid(field, "a list of strings")),
        }
    }

    /// An ordered list of `{k, v}` items, sorted by `k`, yielding the `v`s.
    pub fn ordered(&self, field: &str) -> Result<Vec<String>, TemplateError> {
        let items = match self.get(field) {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(self.invalid(field, "an ordered list")),
        };

        let mut keyed = Vec::with_capacity(items.len());
        for item in items {
            let key = item.get("k").and_then(Value::as_i64);
            let value = match item.get("v") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
            match (key, value) {
                (Some(k), Some(v)) => keyed.push((k, v)),
                _ => return Err(self.invalid(field, "an ordered list of {k, v} items")),
            }
        }
        keyed.sort_by_key(|(k, _)| *k);

        Ok(keyed.into_iter().map(|(_, v)| v).collect())
    }

    pub(crate) fn missing(&self, field: &str) -> TemplateError {
        TemplateError::MissingField {
            class: self.class_kind.clone(),
            iid: self.iid.clone(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(&self, field: &str, expected: &'static str) -> TemplateError {
        TemplateError::InvalidField {
            class: self.class_kind.clone(),
            iid: self.iid.clone(),
            field: field.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_envelope() {
        let r = record(json!({
            "classKind": "Option",
            "iid": "O1",
            "revisionNumber": 4,
            "modifiedOn": "2020-01-01T00:00:00.000Z"
        }));
        assert_eq!(r.class_kind(), "Option");
        assert_eq!(r.iid(), "O1");
        assert_eq!(r.revision_number(), 4.0);
        assert_eq!(r.modified_on(), Some("2020-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_envelope_errors() {
        assert_eq!(
            Record::from_value(json!([1, 2])).unwrap_err(),
            TemplateError::NotAnObject
        );
        assert_eq!(
            Record::from_value(json!({"iid": "X", "revisionNumber": 1})).unwrap_err(),
            TemplateError::Envelope { field: "classKind" }
        );
        assert_eq!(
            Record::from_value(json!({"classKind": "Option", "iid": "X"})).unwrap_err(),
            TemplateError::Envelope {
                field: "revisionNumber"
            }
        );
    }

    #[test]
    fn test_ordered_sorted_by_key() {
        let r = record(json!({
            "classKind": "Iteration", "iid": "I1", "revisionNumber": 1,
            "option": [{"k": 2, "v": "B"}, {"k": 1, "v": "A"}]
        }));
        assert_eq!(r.ordered("option").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_wrong_shape_is_invalid() {
        let r = record(json!({
            "classKind": "Parameter", "iid": "P1", "revisionNumber": 1,
            "owner": ["D1"], "isOptionDependent": "maybe"
        }));
        assert!(matches!(r.id("owner"), Err(TemplateError::InvalidField { .. })));
        assert!(matches!(r.flag("isOptionDependent"), Err(TemplateError::InvalidField { .. })));
    }

    #[test]
    fn test_number_must_be_finite() {
        let r = record(json!({
            "classKind": "DecompositionRule", "iid": "R1", "revisionNumber": 1,
            "minContained": " 2 ", "maxContained": "NaN", "maxRelated": "inf"
        }));
        assert_eq!(r.number("minContained").unwrap(), Some(2.0));
        assert!(matches!(r.number("maxContained"), Err(TemplateError::InvalidField { .. })));
        assert!(matches!(r.number("maxRelated"), Err(TemplateError::InvalidField { .. })));
    }

    #[test]
    fn test_null_and_empty_read_as_absent() {
        let r = record(json!({
            "classKind": "Parameter", "iid": "P1", "revisionNumber": 1,
            "scale": null, "group": "", "valueSet": null
        }));
        assert_eq!(r.id("scale").unwrap(), None);
        assert_eq!(r.id("group").unwrap(), None);
        assert!(r.strings("valueSet").unwrap().is_empty());
    }
}
