use std::fmt;

use chrono::{DateTime, Utc};
use newsword_core::Clock;
use newsword_core::model::{Article, GuessOutcome, RoundState};
use tracing::{debug, info, warn};

use super::progress::SessionProgress;
use crate::error::{FetchError, SessionError};

//
// ─── PHASES & RECORDS ──────────────────────────────────────────────────────────
//

/// Where a game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the headline fetch to resolve.
    Loading,
    /// A target is masked and guesses are accepted.
    InRound,
    /// The current target was guessed; waiting for the player to move on.
    RoundWon,
    /// Every round has been played.
    Finished,
    /// The fetch failed; terminal.
    FetchFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Solved,
    Skipped,
}

/// How a finished round went, kept for the end-of-game recap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub target: String,
    pub outcome: RoundOutcome,
    pub wrong_guesses: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of the day's headlines.
///
/// `current_index` points at the next article to start: starting a round
/// activates `articles[current_index]` and immediately moves the pointer past
/// it. The pointer therefore reaches the end as soon as the last round begins,
/// which is what `is_finished` reports; `phase` only becomes
/// [`SessionPhase::Finished`] once the player moves past that last round.
#[derive(Clone)]
pub struct GameSession {
    clock: Clock,
    phase: SessionPhase,
    articles: Vec<Article>,
    current_index: usize,
    active: Option<usize>,
    round: Option<RoundState>,
    records: Vec<RoundRecord>,
    fetch_error: Option<String>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// A session waiting for its headlines.
    #[must_use]
    pub fn loading(clock: Clock) -> Self {
        Self {
            clock,
            phase: SessionPhase::Loading,
            articles: Vec::new(),
            current_index: 0,
            active: None,
            round: None,
            records: Vec::new(),
            fetch_error: None,
            started_at: clock.now(),
            completed_at: None,
        }
    }

    /// A session that starts playing `articles` right away.
    #[must_use]
    pub fn with_articles(articles: Vec<Article>, clock: Clock) -> Self {
        let mut session = Self::loading(clock);
        session.apply_articles(articles);
        session
    }

    /// Resolve the loading phase with the outcome of the headline fetch.
    ///
    /// Articles start the first round (or finish immediately when there are none);
    /// a fetch error moves the session to [`SessionPhase::FetchFailed`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` if the session has left `Loading`.
    pub fn load(&mut self, result: Result<Vec<Article>, FetchError>) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Loading {
            return Err(SessionError::AlreadyLoaded);
        }

        match result {
            Ok(articles) => self.apply_articles(articles),
            Err(err) => {
                warn!(error = %err, "headline fetch failed");
                self.fetch_error = Some(err.to_string());
                self.phase = SessionPhase::FetchFailed;
                self.completed_at = Some(self.clock.now());
            }
        }
        Ok(())
    }

    fn apply_articles(&mut self, articles: Vec<Article>) {
        info!(rounds = articles.len(), "session loaded");
        self.articles = articles;
        self.advance_or_finish();
    }

    /// Activate the article at the pointer and move the pointer past it.
    ///
    /// A round still in progress is abandoned without a record; use [`Self::skip`]
    /// to leave a round on purpose.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInRound` before loading or after the session ended,
    /// and `SessionError::Exhausted` when no article is left to start.
    pub fn start_round(&mut self) -> Result<&RoundState, SessionError> {
        match self.phase {
            SessionPhase::InRound | SessionPhase::RoundWon => {}
            phase => return Err(SessionError::NotInRound { phase }),
        }
        self.activate_next()
    }

    fn activate_next(&mut self) -> Result<&RoundState, SessionError> {
        let Some(article) = self.articles.get(self.current_index) else {
            return Err(SessionError::Exhausted);
        };
        let round = RoundState::new(article.target());

        self.active = Some(self.current_index);
        self.current_index += 1;
        self.phase = SessionPhase::InRound;
        debug!(
            round = self.current_index,
            total = self.articles.len(),
            letters = round.len(),
            "round started"
        );
        Ok(&*self.round.insert(round))
    }

    fn advance_or_finish(&mut self) {
        if self.activate_next().is_err() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
        self.active = None;
        self.round = None;
        self.completed_at = Some(self.clock.now());
        let progress = self.progress();
        info!(
            solved = progress.solved,
            skipped = progress.skipped,
            "session finished"
        );
    }

    /// Compare `input` with the current target.
    ///
    /// A correct guess ends the round ([`SessionPhase::RoundWon`]); a wrong one
    /// reveals the next letter and keeps the round open.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInRound` unless a round is in progress.
    pub fn check_guess(&mut self, input: &str) -> Result<GuessOutcome, SessionError> {
        let phase = self.phase;
        if phase != SessionPhase::InRound {
            return Err(SessionError::NotInRound { phase });
        }
        let round = self
            .round
            .as_mut()
            .ok_or(SessionError::NotInRound { phase })?;

        let outcome = round.check_guess(input);
        match outcome {
            GuessOutcome::Correct => {
                let record = RoundRecord {
                    target: round.target().to_string(),
                    outcome: RoundOutcome::Solved,
                    wrong_guesses: round.wrong_guesses(),
                };
                self.records.push(record);
                self.phase = SessionPhase::RoundWon;
                debug!(round = self.current_index, "round won");
            }
            GuessOutcome::Incorrect => {
                debug!(hint = %round.hint(), "wrong guess");
            }
        }
        Ok(outcome)
    }

    /// Like [`Self::check_guess`], but `None` ("nothing entered") is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInRound` for a submitted guess outside a round.
    pub fn submit_guess(&mut self, input: Option<&str>) -> Result<Option<GuessOutcome>, SessionError> {
        match input {
            Some(input) => self.check_guess(input).map(Some),
            None => {
                debug!("no guess entered");
                Ok(None)
            }
        }
    }

    /// Reveal the next masked letter of the current target.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInRound` unless a round is in progress.
    pub fn reveal_one_letter(&mut self) -> Result<Option<char>, SessionError> {
        let phase = self.phase;
        if phase != SessionPhase::InRound {
            return Err(SessionError::NotInRound { phase });
        }
        let round = self
            .round
            .as_mut()
            .ok_or(SessionError::NotInRound { phase })?;
        Ok(round.reveal_one_letter())
    }

    /// Give up on the current round and move to the next one, or finish.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInRound` before loading or after the session ended.
    pub fn skip(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::InRound => {
                if let Some(round) = &self.round {
                    self.records.push(RoundRecord {
                        target: round.target().to_string(),
                        outcome: RoundOutcome::Skipped,
                        wrong_guesses: round.wrong_guesses(),
                    });
                }
                debug!(round = self.current_index, "round skipped");
            }
            SessionPhase::RoundWon => {}
            phase => return Err(SessionError::NotInRound { phase }),
        }
        self.advance_or_finish();
        Ok(())
    }

    /// Move on after a won round: start the next one, or finish.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundInProgress` while the target is still unsolved,
    /// and `SessionError::NotInRound` in any other phase.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::RoundWon => {
                self.advance_or_finish();
                Ok(())
            }
            SessionPhase::InRound => Err(SessionError::RoundInProgress),
            phase => Err(SessionError::NotInRound { phase }),
        }
    }

    /// True once the pointer has moved past the last article.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase != SessionPhase::Loading && self.current_index >= self.articles.len()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn current_article(&self) -> Option<&Article> {
        self.active.and_then(|idx| self.articles.get(idx))
    }

    /// Index of the next article to start.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the active round.
    #[must_use]
    pub fn round_number(&self) -> Option<usize> {
        self.active.map(|idx| idx + 1)
    }

    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.articles.len()
    }

    /// Rounds that have not been started yet.
    #[must_use]
    pub fn remaining_rounds(&self) -> usize {
        self.articles.len().saturating_sub(self.current_index)
    }

    /// The active headline with its target replaced by the current hint.
    #[must_use]
    pub fn masked_headline(&self) -> Option<String> {
        let article = self.current_article()?;
        let round = self.round.as_ref()?;
        Some(article.masked_body(round))
    }

    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    #[must_use]
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let solved = self
            .records
            .iter()
            .filter(|record| record.outcome == RoundOutcome::Solved)
            .count();
        SessionProgress {
            total: self.total_rounds(),
            played: self.records.len(),
            solved,
            skipped: self.records.len() - solved,
            remaining: self.remaining_rounds(),
            is_finished: self.phase == SessionPhase::Finished,
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("articles_len", &self.articles.len())
            .field("current_index", &self.current_index)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
