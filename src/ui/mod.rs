//! User interface module - terminal output for the CLI.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Re-exports used by `main.rs`

pub mod formatter;

pub use formatter::{
    display_commit_summary, display_error, display_release, display_release_types,
    display_status, format_release,
};
