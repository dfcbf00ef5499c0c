use crate::error::{AnalyzerError, Result};
use regex::Regex;
use serde_json::Value;

/// A compiled match pattern for one rule field.
///
/// Mappings and sequences compose recursively; every leaf is either a
/// literal compared for equality or a regular expression searched in the
/// string form of the commit value.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(Value),
    Regex(Regex),
    Map(Vec<(String, Pattern)>),
    Seq(Vec<Pattern>),
}

impl Pattern {
    /// Compile a rule-side value into a pattern.
    ///
    /// Strings written as `/body/` become regular expressions. `field` is the
    /// path of the value inside the rule and is reported on failure.
    ///
    /// # Returns
    /// * `Ok(Pattern)` - Compiled pattern
    /// * `Err(AnalyzerError::Pattern)` - A `/body/` string that is not a valid regex
    pub fn compile(field: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => match regex_source(s) {
                Some(source) => Regex::new(source)
                    .map(Pattern::Regex)
                    .map_err(|e| AnalyzerError::pattern(field, e.to_string())),
                None => Ok(Pattern::Literal(value.clone())),
            },
            Value::Object(map) => map
                .iter()
                .map(|(key, child)| {
                    let path = format!("{}.{}", field, key);
                    Ok((key.clone(), Pattern::compile(&path, child)?))
                })
                .collect::<Result<Vec<_>>>()
                .map(Pattern::Map),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, child)| Pattern::compile(&format!("{}[{}]", field, i), child))
                .collect::<Result<Vec<_>>>()
                .map(Pattern::Seq),
            _ => Ok(Pattern::Literal(value.clone())),
        }
    }

    /// Test this pattern against a commit-side value.
    ///
    /// Mappings use subset semantics: every key of the pattern must exist on
    /// the commit side and match, extra keys are ignored. Sequences compare
    /// positionally and the commit side may be longer.
    pub fn test_against(&self, value: &Value) -> bool {
        match self {
            Pattern::Literal(expected) => literal_eq(expected, value),
            Pattern::Regex(re) => re.is_match(&stringify(value)),
            Pattern::Map(entries) => match value.as_object() {
                Some(obj) => entries
                    .iter()
                    .all(|(key, p)| obj.get(key).is_some_and(|v| p.test_against(v))),
                None => false,
            },
            Pattern::Seq(items) => match value.as_array() {
                Some(arr) => {
                    items.len() <= arr.len()
                        && items.iter().zip(arr).all(|(p, v)| p.test_against(v))
                }
                None => false,
            },
        }
    }
}

/// Extract the body of a `/body/` string, if `s` has that form.
fn regex_source(s: &str) -> Option<&str> {
    if s.len() < 2 || !s.starts_with('/') || !s.ends_with('/') {
        return None;
    }
    let body = &s[1..s.len() - 1];
    // a line break disqualifies the string as a pattern literal
    if body.contains(['\n', '\r']) {
        return None;
    }
    Some(body)
}

fn literal_eq(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        _ => expected == actual,
    }
}

/// String form of a commit value used for regex matching.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
