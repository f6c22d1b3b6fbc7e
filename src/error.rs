use thiserror::Error;

/// Failures outside the scoring engine: fetching markup and loading settings.
#[derive(Error, Debug)]
pub enum CitabilityError {
    /// Transport failure: timeout, refused connection, bad URL.
    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    /// Server answered with a non-success status.
    #[error("Failed to fetch page: HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CitabilityError {
    fn from(e: config::ConfigError) -> Self {
        CitabilityError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CitabilityError>;
