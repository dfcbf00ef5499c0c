use crate::domain::Pattern;
use crate::error::Result;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// A release rule: fields to match against a commit plus the release
/// type reported when they all match.
///
/// `release` and `breaking` are reserved and never matched. A rule without
/// a release (or `release = false`) can match but never raises a result.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ReleaseRule {
    #[serde(default, deserialize_with = "deserialize_release")]
    pub release: Option<String>,

    #[serde(default)]
    pub breaking: bool,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ReleaseRule {
    /// Create a rule reporting `release` with no match fields yet
    pub fn new(release: Option<&str>) -> Self {
        ReleaseRule {
            release: release.filter(|r| !r.is_empty()).map(str::to_string),
            breaking: false,
            fields: Map::new(),
        }
    }

    /// Require at least one note on the commit
    pub fn breaking(mut self) -> Self {
        self.breaking = true;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Compile every match field into a pattern.
    ///
    /// # Returns
    /// * `Ok` - One `(field, pattern)` pair per match field
    /// * `Err(AnalyzerError::Pattern)` - A field holds an invalid regex
    pub fn patterns(&self) -> Result<Vec<(&str, Pattern)>> {
        self.fields
            .iter()
            .map(|(name, value)| Ok((name.as_str(), Pattern::compile(name, value)?)))
            .collect()
    }
}

impl fmt::Display for ReleaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.fields.clone();
        if self.breaking {
            shown.insert("breaking".to_string(), Value::Bool(true));
        }
        shown.insert(
            "release".to_string(),
            self.release
                .as_ref()
                .map_or(Value::Bool(false), |r| Value::String(r.clone())),
        );
        write!(f, "{}", Value::Object(shown))
    }
}

/// Accepts a release type string, or `false`/`""` for "no release".
fn deserialize_release<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Release {
        Type(String),
        Flag(bool),
    }

    match Option::<Release>::deserialize(deserializer)? {
        Some(Release::Type(r)) if !r.is_empty() => Ok(Some(r)),
        Some(Release::Flag(true)) => Err(D::Error::custom(
            "release must be a release type or false, got true",
        )),
        _ => Ok(None),
    }
}
