use newsword_core::model::GuessOutcome;
use services::{GameSession, SessionError, SessionPhase};

use super::screen_vm::{GameScreenVm, map_game_screen};
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Focus,
    Blur,
    Input(String),
    Submit,
    Skip,
    Next,
}

/// The answer box.
///
/// `None` means nothing has been entered yet and the placeholder is showing;
/// submitting in that state is ignored. Focusing the box turns it into an
/// empty (but real) guess; leaving it empty brings the placeholder back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessField {
    value: Option<String>,
}

impl GuessField {
    pub const PLACEHOLDER: &'static str = "TYPE ANSWER";

    pub fn focus(&mut self) {
        if self.value.is_none() {
            self.value = Some(String::new());
        }
    }

    pub fn blur(&mut self) {
        if self.value.as_deref() == Some("") {
            self.value = None;
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn reset(&mut self) {
        self.value = None;
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct GameVm {
    session: GameSession,
    field: GuessField,
    round_limit: usize,
}

impl GameVm {
    #[must_use]
    pub fn new(session: GameSession, round_limit: usize) -> Self {
        Self {
            session,
            field: GuessField::default(),
            round_limit,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn field(&self) -> &GuessField {
        &self.field
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn screen(&self) -> GameScreenVm {
        map_game_screen(&self.session, self.round_limit)
    }

    /// Apply a user intent to the session.
    ///
    /// The answer box is cleared back to its placeholder after every evaluated
    /// guess and whenever a new round starts.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Rejected` when the session refuses the transition.
    pub fn apply(&mut self, intent: GameIntent) -> Result<Option<GuessOutcome>, ViewError> {
        match intent {
            GameIntent::Focus => {
                self.field.focus();
                Ok(None)
            }
            GameIntent::Blur => {
                self.field.blur();
                Ok(None)
            }
            GameIntent::Input(value) => {
                self.field.set(value);
                Ok(None)
            }
            GameIntent::Submit => {
                let outcome = self
                    .session
                    .submit_guess(self.field.value())
                    .map_err(reject)?;
                if outcome.is_some() {
                    self.field.reset();
                }
                Ok(outcome)
            }
            GameIntent::Skip => {
                self.session.skip().map_err(reject)?;
                self.field.reset();
                Ok(None)
            }
            GameIntent::Next => {
                self.session.advance().map_err(reject)?;
                self.field.reset();
                Ok(None)
            }
        }
    }
}

fn reject(_: SessionError) -> ViewError {
    ViewError::Rejected
}
