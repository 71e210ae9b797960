use thiserror::Error;

/// Errors that can occur during recipe search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query was empty after trimming leading/trailing whitespace
    #[error("Search query is empty")]
    EmptyQuery,

    /// Failed to reach the search endpoint
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Search endpoint answered with a non-success status
    #[error("Search endpoint returned status {0}")]
    StatusError(u16),

    /// Response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl SearchError {
    /// Fixed user-facing message for this error.
    ///
    /// Validation failures get their own line; every other cause collapses
    /// into the same generic connectivity message. The underlying cause
    /// stays available through `Display`/`source` for logging.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "Please enter a search term",
            _ => "Error loading recipes. Please check your internet connection.",
        }
    }
}
