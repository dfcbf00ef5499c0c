use crate::analyzer::diagnostics::{Diagnostics, NoopDiagnostics, ResolutionEvent};
use crate::analyzer::matcher::RuleMatcher;
use crate::domain::{Commit, ReleaseRule, ReleaseTypes};
use crate::error::Result;

/// Outcome of resolving one commit against a rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution<'r> {
    /// Highest release type among the matching rules
    pub release: Option<&'r str>,
    /// Number of rules evaluated that matched the commit
    pub matched: usize,
}

/// Resolves the highest release type triggered by a commit
pub struct ReleaseResolver<'a, D = NoopDiagnostics> {
    release_types: &'a ReleaseTypes,
    diagnostics: D,
}

impl<'a> ReleaseResolver<'a> {
    /// Create a resolver over `release_types` with no diagnostics
    pub fn new(release_types: &'a ReleaseTypes) -> Self {
        ReleaseResolver {
            release_types,
            diagnostics: NoopDiagnostics,
        }
    }
}

impl<'a, D: Diagnostics> ReleaseResolver<'a, D> {
    /// Replace the diagnostics observer
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> ReleaseResolver<'a, E> {
        ReleaseResolver {
            release_types: self.release_types,
            diagnostics,
        }
    }

    pub fn release_types(&self) -> &ReleaseTypes {
        self.release_types
    }

    /// Fold every rule matching `commit` into the highest release type.
    ///
    /// Rules are visited in the given order. Once the highest type of the
    /// ordering is reached, the remaining rules are not evaluated.
    ///
    /// # Returns
    /// * `Ok(Some(release))` - Highest release type among matching rules
    /// * `Ok(None)` - No matching rule carries a release
    /// * `Err` - A rule has an invalid pattern or an unknown release type
    pub fn resolve<'r>(
        &self,
        rules: &'r [ReleaseRule],
        commit: &Commit,
    ) -> Result<Option<&'r str>> {
        self.resolve_detailed(rules, commit).map(|r| r.release)
    }

    /// Like [`resolve`](Self::resolve), also counting the matching rules.
    ///
    /// A commit matched only by rules without a release yields
    /// `release: None` with a non-zero `matched`.
    pub fn resolve_detailed<'r>(
        &self,
        rules: &'r [ReleaseRule],
        commit: &Commit,
    ) -> Result<Resolution<'r>> {
        let mut best: Option<&'r str> = None;
        let mut matched = 0;

        for rule in rules {
            if !RuleMatcher::matches(rule, commit)? {
                continue;
            }
            matched += 1;

            let release = rule.release.as_deref();
            if !self.release_types.higher_than(best, release)? {
                self.diagnostics
                    .record(&ResolutionEvent::RuleMatchedButSuperseded { rule, release, best });
                continue;
            }

            // higher_than only returns true for a recognized candidate
            let Some(raised) = release else { continue };
            best = Some(raised);
            self.diagnostics.record(&ResolutionEvent::RuleMatchedAndRaised {
                rule,
                release: raised,
            });

            if raised == self.release_types.highest() {
                self.diagnostics
                    .record(&ResolutionEvent::HighestReached { release: raised });
                break;
            }
        }

        Ok(Resolution {
            release: best,
            matched,
        })
    }
}
