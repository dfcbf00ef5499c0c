use crate::analyzer::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::analyzer::resolver::ReleaseResolver;
use crate::config::Config;
use crate::domain::{Commit, ReleaseRule, ReleaseTypes};
use crate::error::Result;
use serde_json::Value;
use tracing::{debug, info};

/// Returns the rules applied when no custom rule matches a commit.
pub fn default_release_rules() -> Vec<ReleaseRule> {
    vec![
        ReleaseRule::new(Some("major")).breaking(),
        ReleaseRule::new(Some("patch")).with_field("revert", Value::Bool(true)),
        ReleaseRule::new(Some("minor")).with_field("type", "feat"),
        ReleaseRule::new(Some("patch")).with_field("type", "fix"),
        ReleaseRule::new(Some("patch")).with_field("type", "perf"),
    ]
}

/// Analyzes commits to determine the release type they trigger
pub struct CommitAnalyzer<D = TracingDiagnostics> {
    release_types: ReleaseTypes,
    release_rules: Vec<ReleaseRule>,
    default_rules: Vec<ReleaseRule>,
    diagnostics: D,
}

impl CommitAnalyzer {
    /// Create an analyzer from a configuration, validating it first
    pub fn new(config: Config) -> Result<Self> {
        let release_types = config.validate()?;
        Ok(CommitAnalyzer {
            release_types,
            release_rules: config.release_rules,
            default_rules: default_release_rules(),
            diagnostics: TracingDiagnostics,
        })
    }
}

impl<D: Diagnostics> CommitAnalyzer<D> {
    /// Replace the diagnostics observer passed to each resolution
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> CommitAnalyzer<E> {
        CommitAnalyzer {
            release_types: self.release_types,
            release_rules: self.release_rules,
            default_rules: self.default_rules,
            diagnostics,
        }
    }

    pub fn release_types(&self) -> &ReleaseTypes {
        &self.release_types
    }

    /// Determine the release type of a single commit.
    ///
    /// Custom rules are tried first. The default rules apply only when no
    /// custom rule matched, so a matching custom rule without a release
    /// suppresses the commit.
    pub fn analyze_commit(&self, commit: &Commit) -> Result<Option<&str>> {
        let resolver = ReleaseResolver::new(&self.release_types).with_diagnostics(&self.diagnostics);

        let custom = resolver.resolve_detailed(&self.release_rules, commit)?;
        if custom.matched > 0 {
            return Ok(custom.release);
        }

        resolver.resolve(&self.default_rules, commit)
    }

    /// Determine the highest release type over a sequence of commits.
    ///
    /// Stops at the first commit reaching the highest release type.
    ///
    /// # Returns
    /// * `Ok(Some(release))` - Highest release type triggered by any commit
    /// * `Ok(None)` - No commit triggers a release
    /// * `Err` - A rule is misconfigured; no partial result is returned
    pub fn analyze_commits(&self, commits: &[Commit]) -> Result<Option<&str>> {
        let mut release: Option<&str> = None;

        for commit in commits {
            info!("Analyzing commit: {}", commit.summary());
            let commit_release = self.analyze_commit(commit)?;

            match commit_release {
                Some(r) => info!("The release type for the commit is {}", r),
                None => info!("The commit should not trigger a release"),
            }

            if self.release_types.higher_than(release, commit_release)? {
                release = commit_release;
            }

            if release == Some(self.release_types.highest()) {
                debug!("Highest release type reached, skipping remaining commits");
                break;
            }
        }

        info!(
            "Analysis of {} commits complete: {}",
            commits.len(),
            release.map_or("no release".to_string(), |r| format!("{} release", r))
        );
        Ok(release)
    }
}
