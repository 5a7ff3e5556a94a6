use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpstreamError>;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure, timeout, or a body that could not be decoded.
    #[error("request to NYTimes failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("NYTimes returned status {status}: {body}")]
    Status { status: u16, body: String },
}
