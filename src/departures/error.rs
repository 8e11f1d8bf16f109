use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline step an [`Error`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Decode,
    Format,
    Notify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Decode => write!(f, "decode"),
            Self::Format => write!(f, "format"),
            Self::Notify => write!(f, "notify"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to departures API failed: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("departures API failed with status: {status} Body: {body}")]
    FetchStatus { status: String, body: String },

    #[error("failed to decode departures: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("departures response contains no tabs")]
    NoTabs,

    #[error("request to Slack failed: {0}")]
    Notify(#[source] reqwest::Error),

    #[error("Send to Slack failed with status: {status} Body: {body}")]
    NotifyStatus { status: String, body: String },
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Client(_) | Self::Fetch(_) | Self::FetchStatus { .. } => Stage::Fetch,
            Self::Decode(_) => Stage::Decode,
            Self::NoTabs => Stage::Format,
            Self::Notify(_) | Self::NotifyStatus { .. } => Stage::Notify,
        }
    }
}
