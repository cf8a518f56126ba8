use std::fmt;

/// Alphanumeric token Spotify uses to reference a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL serving the audio file, as resolved by the download service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink(String);

impl DownloadLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    /// User-facing message.
    Error(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Input text plus the state of the one request it may have started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    pub input: String,
    pub state: RequestState,
}

impl SubmitForm {
    /// Whether the submit button accepts a press.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.state.is_in_flight()
    }
}
