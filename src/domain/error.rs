use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a Spotify URL";
pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid Spotify URL. Please enter a valid Spotify song link.";
pub const DOWNLOAD_FAILED_MESSAGE: &str =
    "Failed to download song. Please check your API key and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("No URL entered")]
    EmptyInput,

    #[error("No track ID found in input")]
    InvalidFormat,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Could not open download link: {0}")]
    Navigation(String),
}

impl AppError {
    /// Text shown in the error region. Every failure after the request is issued
    /// collapses to the same message; the cause only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::EmptyInput => EMPTY_INPUT_MESSAGE,
            AppError::InvalidFormat => INVALID_FORMAT_MESSAGE,
            AppError::RequestFailed(_)
            | AppError::MalformedResponse(_)
            | AppError::Navigation(_) => DOWNLOAD_FAILED_MESSAGE,
        }
    }
}
