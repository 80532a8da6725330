use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use services::{GameSession, RoundOutcome, RoundRecord, SessionPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub title: String,
    pub edition: String,
    pub body: ScreenBodyVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenBodyVm {
    Loading,
    Failed(FailedScreenVm),
    Round(RoundScreenVm),
    Won(WonScreenVm),
    Finished(FinishedScreenVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedScreenVm {
    pub message: String,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundScreenVm {
    pub subhead: String,
    pub counter: String,
    pub headline: String,
    pub source: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WonScreenVm {
    pub answer: String,
    pub headline: String,
    pub source: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedScreenVm {
    pub message: String,
    pub detail: String,
    pub recap: Vec<RecapLineVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecapLineVm {
    pub answer: String,
    pub status: String,
}

#[must_use]
pub fn headline_title(round_limit: usize) -> String {
    format!("TOP {round_limit} DAILY HEADLINES")
}

/// Dateline such as `"TUESDAY, NOVEMBER 14, 2023"`, in the zone of `at`.
#[must_use]
pub fn edition_line<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%A, %B %-d, %Y").to_string().to_uppercase()
}

/// Maps the session to the screen; the dateline uses the player's local date.
#[must_use]
pub fn map_game_screen(session: &GameSession, round_limit: usize) -> GameScreenVm {
    GameScreenVm {
        title: headline_title(round_limit),
        edition: edition_line(&session.started_at().with_timezone(&Local)),
        body: map_body(session),
    }
}

fn map_body(session: &GameSession) -> ScreenBodyVm {
    match session.phase() {
        SessionPhase::Loading => ScreenBodyVm::Loading,
        SessionPhase::FetchFailed => ScreenBodyVm::Failed(FailedScreenVm {
            message: "OFFLINE / ERROR".to_string(),
            detail: session.fetch_error().map(str::to_string),
        }),
        SessionPhase::InRound => map_round(session).map_or(ScreenBodyVm::Loading, ScreenBodyVm::Round),
        SessionPhase::RoundWon => map_won(session).map_or(ScreenBodyVm::Loading, ScreenBodyVm::Won),
        SessionPhase::Finished => ScreenBodyVm::Finished(map_finished(session)),
    }
}

fn map_round(session: &GameSession) -> Option<RoundScreenVm> {
    let article = session.current_article()?;
    let round = session.round()?;
    let number = session.round_number()?;

    Some(RoundScreenVm {
        subhead: format!("GUESS THE {} LETTER SUBJECT", round.len()),
        counter: format!("HEADLINE {number} OF {}", session.total_rounds()),
        headline: article.masked_body(round),
        source: format!("SOURCE: {}", article.source()),
    })
}

fn map_won(session: &GameSession) -> Option<WonScreenVm> {
    let article = session.current_article()?;
    Some(WonScreenVm {
        answer: article.target().to_uppercase(),
        headline: article.body().to_string(),
        source: format!("SOURCE: {}", article.source()),
    })
}

fn map_finished(session: &GameSession) -> FinishedScreenVm {
    let detail = if session.total_rounds() == 0 {
        "NO PLAYABLE HEADLINES TODAY".to_string()
    } else {
        format!("YOU DECODED THE DAILY TOP {}", session.total_rounds())
    };

    FinishedScreenVm {
        message: "MISSION ACCOMPLISHED".to_string(),
        detail,
        recap: session.records().iter().map(map_recap_line).collect(),
    }
}

fn map_recap_line(record: &RoundRecord) -> RecapLineVm {
    let status = match (record.outcome, record.wrong_guesses) {
        (RoundOutcome::Skipped, _) => "SKIPPED".to_string(),
        (RoundOutcome::Solved, 0) => "SOLVED FIRST TRY".to_string(),
        (RoundOutcome::Solved, 1) => "SOLVED AFTER 1 HINT".to_string(),
        (RoundOutcome::Solved, hints) => format!("SOLVED AFTER {hints} HINTS"),
    };
    RecapLineVm {
        answer: record.target.to_uppercase(),
        status,
    }
}
