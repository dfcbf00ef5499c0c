use thiserror::Error;

/// Unified error type for commit analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid pattern in rule field '{field}': {message}")]
    Pattern { field: String, message: String },

    #[error("Config parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-analyzer
pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create a configuration error with context
    pub fn configuration(msg: impl Into<String>) -> Self {
        AnalyzerError::Configuration(msg.into())
    }

    /// Create a pattern error for the given rule field
    pub fn pattern(field: impl Into<String>, msg: impl Into<String>) -> Self {
        AnalyzerError::Pattern {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an error for a release type missing from the ordering
    pub fn unknown_release_type(release: &str) -> Self {
        AnalyzerError::Configuration(format!("Unknown release type '{}'", release))
    }
}
