//! Analysis workflow driven by the CLI
//!
//! Keeps argument parsing in main.rs apart from loading configuration,
//! reading commits and running the analyzer.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

use crate::analyzer::CommitAnalyzer;
use crate::config::{self, Config};
use crate::domain::Commit;

/// Arguments for the analysis workflow
///
/// Mirrors the CLI Args but without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Path to a JSON array of commits, `-` for stdin
    pub commits_path: String,
}

/// Result of a successful analysis
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Highest release type triggered, if any
    pub release: Option<String>,

    /// Number of commits read
    pub commits: usize,
}

/// Parse commits from JSON text holding an array of commit objects
pub fn parse_commits(text: &str) -> Result<Vec<Commit>> {
    serde_json::from_str(text).context("Commits must be a JSON array of objects")
}

/// Read commits from a file, or from stdin when `path` is `-`
pub fn read_commits(path: &str) -> Result<Vec<Commit>> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read commits from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read commits from {}", path))?
    };
    parse_commits(&text)
}

/// Load the configuration named by the workflow arguments
pub fn load_workflow_config(args: &AnalyzeWorkflowArgs) -> Result<Config> {
    config::load_config(args.config_path.as_deref()).context("Error loading config")
}

/// Main analysis workflow
///
/// 1. Load and validate configuration
/// 2. Read commits
/// 3. Resolve the highest release type
pub fn run_analyze_workflow(args: &AnalyzeWorkflowArgs) -> Result<WorkflowResult> {
    let config = load_workflow_config(args)?;
    let commits = read_commits(&args.commits_path)?;
    analyze(config, &commits)
}

/// Analyze already loaded commits with `config`
pub fn analyze(config: Config, commits: &[Commit]) -> Result<WorkflowResult> {
    let analyzer = CommitAnalyzer::new(config).context("Invalid release configuration")?;
    let release = analyzer.analyze_commits(commits)?;

    Ok(WorkflowResult {
        release: release.map(str::to_string),
        commits: commits.len(),
    })
}
