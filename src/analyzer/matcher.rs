use crate::domain::{Commit, ReleaseRule};
use crate::error::Result;

/// Decides whether a single release rule matches a single commit
pub struct RuleMatcher;

impl RuleMatcher {
    /// Match `rule` against `commit`.
    ///
    /// A breaking rule never matches a commit without notes. Otherwise every
    /// match field must be present on the commit and match it; a rule with
    /// no match fields matches any commit.
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - Whether the rule matches
    /// * `Err(AnalyzerError::Pattern)` - A rule field holds an invalid regex
    pub fn matches(rule: &ReleaseRule, commit: &Commit) -> Result<bool> {
        if rule.breaking && !commit.has_notes() {
            return Ok(false);
        }

        let patterns = rule.patterns()?;

        Ok(patterns.iter().all(|(field, pattern)| {
            commit
                .get(field)
                .is_some_and(|value| pattern.test_against(value))
        }))
    }
}
