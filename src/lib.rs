pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use analyzer::{CommitAnalyzer, ReleaseResolver, RuleMatcher};
pub use domain::{Commit, ReleaseRule, ReleaseTypes};
pub use error::{AnalyzerError, Result};
