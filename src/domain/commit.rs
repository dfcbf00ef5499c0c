use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A commit already parsed into named fields.
///
/// Typical fields are `type`, `scope`, `subject`, `body`, `revert` and
/// `notes`, but none is required. An absent field never matches a rule
/// field, even one expecting `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commit {
    fields: Map<String, Value>,
}

impl Commit {
    pub fn new(fields: Map<String, Value>) -> Self {
        Commit { fields }
    }

    /// Build a commit from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Commit { fields }),
            other => Err(AnalyzerError::configuration(format!(
                "Commit must be an object, got {}",
                other
            ))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The commit's notes; empty when absent or not a sequence
    pub fn notes(&self) -> &[Value] {
        self.fields
            .get("notes")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the commit carries at least one note (e.g. a breaking change)
    pub fn has_notes(&self) -> bool {
        !self.notes().is_empty()
    }

    /// Short human label, the subject if present
    pub fn summary(&self) -> String {
        let kind = self.get("type").and_then(Value::as_str);
        let subject = self
            .get("subject")
            .or_else(|| self.get("header"))
            .and_then(Value::as_str);

        match (kind, subject) {
            (Some(k), Some(s)) => format!("{}: {}", k, s),
            (None, Some(s)) => s.to_string(),
            (Some(k), None) => k.to_string(),
            (None, None) => Value::Object(self.fields.clone()).to_string(),
        }
    }
}

impl From<Map<String, Value>> for Commit {
    fn from(fields: Map<String, Value>) -> Self {
        Commit::new(fields)
    }
}
