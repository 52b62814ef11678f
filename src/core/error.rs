use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    /// Local precondition failed before any request was sent (e.g. missing API key).
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    /// The remote service reported an error, or its answer could not be read
    /// into a completion.
    #[error("API error{}: {message}", .status_code.map(|c| format!(" ({c})")).unwrap_or_default())]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl LlmError {
    /// HTTP status attached to a provider error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
