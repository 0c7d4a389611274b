use thiserror::Error;

/// Type alias for Result with SweepError
pub type Result<T> = std::result::Result<T, SweepError>;

/// Error types for the sweep pipeline
#[derive(Error, Debug)]
pub enum SweepError {
    /// Gmail API returned an error
    #[error("Gmail API error: {0}")]
    ApiError(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A list or detail-fetch call failed; aborts the run before any mutation
    #[error("Search failed: {0}")]
    SearchError(String),

    /// A trash or delete call failed; remaining records are skipped
    #[error("Mutation failed: {0}")]
    MutationError(String),

    /// IO error (file operations, console reads)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<google_gmail1::Error> for SweepError {
    fn from(error: google_gmail1::Error) -> Self {
        match error {
            // HTTP response with a non-success status code
            google_gmail1::Error::Failure(ref response) => {
                let status = response.status();
                SweepError::ApiError(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ))
            }
            google_gmail1::Error::BadRequest(ref err) => {
                SweepError::ApiError(format!("{}", err))
            }
            google_gmail1::Error::Io(err) => SweepError::ApiError(err.to_string()),
            _ => SweepError::ApiError(error.to_string()),
        }
    }
}
