mod game;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::{FinishedPanel, GameScreen, GameView, RoundPanel, WonPanel};
pub use state::{ViewError, ViewState, view_state_from_resource};
