use crate::error::{AnalyzerError, Result};
use std::fmt;

/// Returns the default release types, highest severity first.
pub fn default_release_types() -> Vec<String> {
    vec![
        "major".to_string(),
        "premajor".to_string(),
        "minor".to_string(),
        "preminor".to_string(),
        "patch".to_string(),
        "prepatch".to_string(),
        "prerelease".to_string(),
    ]
}

/// Total priority order over release type identifiers.
///
/// Index 0 is the highest severity. `None` stands for "no release" and ranks
/// below every recognized type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTypes {
    types: Vec<String>,
}

impl ReleaseTypes {
    /// Build an ordering from identifiers listed highest first.
    ///
    /// Rejects an empty list and duplicate or empty identifiers.
    pub fn new(types: Vec<String>) -> Result<Self> {
        if types.is_empty() {
            return Err(AnalyzerError::configuration(
                "Release types must list at least one identifier",
            ));
        }

        for (i, release) in types.iter().enumerate() {
            if release.is_empty() {
                return Err(AnalyzerError::configuration(
                    "Release types must not contain an empty identifier",
                ));
            }
            if types[..i].contains(release) {
                return Err(AnalyzerError::configuration(format!(
                    "Duplicate release type '{}'",
                    release
                )));
            }
        }

        Ok(ReleaseTypes { types })
    }

    /// The highest-severity release type (index 0)
    pub fn highest(&self) -> &str {
        &self.types[0]
    }

    pub fn contains(&self, release: &str) -> bool {
        self.types.iter().any(|t| t == release)
    }

    /// Position of `release` in the ordering, 0 being the highest
    pub fn position(&self, release: &str) -> Option<usize> {
        self.types.iter().position(|t| t == release)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Fail with a configuration error if `release` is set but unrecognized.
    pub fn check(&self, release: Option<&str>) -> Result<()> {
        match release {
            Some(r) if !self.contains(r) => Err(AnalyzerError::unknown_release_type(r)),
            _ => Ok(()),
        }
    }

    /// Whether `candidate` is strictly higher severity than `current`.
    ///
    /// # Returns
    /// * `Ok(true)` - `candidate` outranks `current`, or `current` is `None`
    ///   and `candidate` is recognized
    /// * `Ok(false)` - `candidate` is `None` or does not outrank `current`
    /// * `Err` - either argument is set but absent from the ordering
    pub fn higher_than(&self, current: Option<&str>, candidate: Option<&str>) -> Result<bool> {
        let current = self.rank(current)?;
        let candidate = self.rank(candidate)?;

        Ok(match (current, candidate) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(cur), Some(cand)) => cand < cur,
        })
    }

    fn rank(&self, release: Option<&str>) -> Result<Option<usize>> {
        match release {
            None => Ok(None),
            Some(r) => self
                .position(r)
                .map(Some)
                .ok_or_else(|| AnalyzerError::unknown_release_type(r)),
        }
    }
}

impl Default for ReleaseTypes {
    fn default() -> Self {
        ReleaseTypes {
            types: default_release_types(),
        }
    }
}

impl fmt::Display for ReleaseTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.types.join(" > "))
    }
}
