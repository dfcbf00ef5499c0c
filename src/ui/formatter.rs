//! Pure formatting functions for UI output.
//!
//! Functions here only print; the `format_*` helpers are side-effect free
//! and tested directly.

use crate::domain::{Commit, ReleaseTypes};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Human-readable label for a resolved release type.
pub fn format_release(release: Option<&str>) -> String {
    match release {
        Some(r) => format!("{} release", r),
        None => "no release".to_string(),
    }
}

/// Display the resolved release type.
///
/// A release is shown with a green checkmark, "no release" with the
/// yellow status arrow.
pub fn display_release(release: Option<&str>) {
    match release {
        Some(_) => println!("\x1b[32m✓\x1b[0m {}", format_release(release)),
        None => display_status(&format_release(release)),
    }
}

/// Display the commits being analyzed.
///
/// Shows up to 10 commit summaries; the remaining count is summarized.
///
/// # Arguments
/// * `commits` - Commits about to be analyzed
pub fn display_commit_summary(commits: &[Commit]) {
    println!("\n\x1b[1mAnalyzing {} commits\x1b[0m", commits.len());

    for (i, commit) in commits.iter().take(10).enumerate() {
        let summary = commit.summary();
        let short: String = summary.chars().take(60).collect();
        println!("  {}. {}", i + 1, short);
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the release type ordering, highest first.
pub fn display_release_types(release_types: &ReleaseTypes) {
    println!("\x1b[1mRelease types (highest first):\x1b[0m");
    for (i, release) in release_types.iter().enumerate() {
        println!("  {}. {}", i + 1, release);
    }
}
