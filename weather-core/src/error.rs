use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Why a lookup could not produce a reading. Never escapes
/// [`WeatherLookupService::get_current`](crate::WeatherLookupService::get_current).
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("weather transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("weather response failed validation: {0}")]
    Validation(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Coarse failure class used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Validation,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Validation => "validation",
        }
    }
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::Transport(_) => FailureKind::Transport,
            LookupError::Validation(_) => FailureKind::Validation,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Transport(TransportError::Timeout(_)))
    }
}
