use thiserror::Error;

/// Every failure a request can end in. The pipeline never recovers on its
/// own; callers receive exactly one of these per failed call.
#[derive(Debug, Error)]
pub enum Error {
    /// The exchange rejected the request (non-2xx). The body is kept
    /// verbatim so the caller can read the exchange's own diagnostics.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
