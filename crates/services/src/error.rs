//! Shared error types for the services crate.

use thiserror::Error;

use crate::sessions::SessionPhase;

/// Errors emitted while fetching headlines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("news API key is not configured")]
    MissingApiKey,
    #[error("headline request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("headline feed rejected the request ({code}): {message}")]
    Api { code: String, message: String },
    #[error("headline feed returned a malformed response")]
    Decode(#[from] serde_json::Error),
    #[error("headline feed unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `GameSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("headlines were already loaded")]
    AlreadyLoaded,
    #[error("no round is in progress (phase: {phase:?})")]
    NotInRound { phase: SessionPhase },
    #[error("the current round has not been won yet")]
    RoundInProgress,
    #[error("no headlines left to play")]
    Exhausted,
}
