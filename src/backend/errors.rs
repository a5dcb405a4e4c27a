use thiserror::Error;

/// Failures surfaced by the fact-check client.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The service answered with a non-success status. The message is
    /// whatever could be extracted from the error body.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
