mod game_vm;
mod screen_vm;

pub use game_vm::{GameIntent, GameVm, GuessField};
pub use screen_vm::{
    FailedScreenVm, FinishedScreenVm, GameScreenVm, RecapLineVm, RoundScreenVm, ScreenBodyVm,
    WonScreenVm, edition_line, headline_title, map_game_screen,
};
