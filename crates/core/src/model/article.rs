use thiserror::Error;

use super::round::{RoundState, masked_headline};
use super::target::derive_target;

/// Separator between a headline's text and the outlet that published it.
pub const HEADLINE_SEPARATOR: &str = " - ";

/// Source used when a headline carries no separator.
pub const UNKNOWN_SOURCE: &str = "Unknown";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArticleError {
    #[error("headline body cannot be empty")]
    EmptyBody,

    #[error("target word cannot be empty")]
    EmptyTarget,

    #[error("target word {target:?} does not appear in the headline")]
    TargetNotInBody { target: String },
}

//
// ─── HEADLINE SPLITTING ────────────────────────────────────────────────────────
//

/// Splits a raw headline on its rightmost `" - "` into `(body, source)`.
///
/// Feeds append the outlet name this way (`"Fed Raises Rates - Reuters"`).
/// Without a separator, or with nothing after it, the source is [`UNKNOWN_SOURCE`].
#[must_use]
pub fn split_headline(title: &str) -> (&str, &str) {
    match title.rsplit_once(HEADLINE_SEPARATOR) {
        Some((body, source)) if !source.trim().is_empty() => (body.trim(), source.trim()),
        Some((body, _)) => (body.trim(), UNKNOWN_SOURCE),
        None => (title.trim(), UNKNOWN_SOURCE),
    }
}

//
// ─── ARTICLE ───────────────────────────────────────────────────────────────────
//

/// One playable headline: its text, where it came from, and the hidden word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    body: String,
    source: String,
    target: String,
}

impl Article {
    /// Creates an article with an explicit target.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::EmptyBody` or `ArticleError::EmptyTarget` for blank input,
    /// and `ArticleError::TargetNotInBody` if `target` cannot be found in `body`.
    pub fn new(
        body: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, ArticleError> {
        let body = body.into();
        let target = target.into();

        if body.trim().is_empty() {
            return Err(ArticleError::EmptyBody);
        }
        if target.trim().is_empty() {
            return Err(ArticleError::EmptyTarget);
        }
        if !body.contains(&target) {
            return Err(ArticleError::TargetNotInBody { target });
        }

        Ok(Self {
            body,
            source: source.into(),
            target,
        })
    }

    /// Builds an article from a raw feed headline.
    ///
    /// Returns `None` when the headline has no qualifying target word.
    #[must_use]
    pub fn from_headline(title: &str) -> Option<Self> {
        let (body, source) = split_headline(title);
        let target = derive_target(body)?;
        Self::new(body, source, target).ok()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Renders the body with the target replaced by the round's spaced hint.
    #[must_use]
    pub fn masked_body(&self, round: &RoundState) -> String {
        masked_headline(&self.body, &self.target, &round.spaced_hint())
    }
}
