//! Analysis engine for resolving release types from commits

pub mod commit_analyzer;
pub mod diagnostics;
pub mod matcher;
pub mod resolver;

pub use commit_analyzer::{default_release_rules, CommitAnalyzer};
pub use diagnostics::{Diagnostics, NoopDiagnostics, ResolutionEvent, TracingDiagnostics};
pub use matcher::RuleMatcher;
pub use resolver::{ReleaseResolver, Resolution};
