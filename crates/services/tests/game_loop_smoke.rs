use std::sync::Arc;

use newsword_core::model::GuessOutcome;
use newsword_core::time::{fixed_clock, fixed_now};
use services::{
    GameLoopService, HeadlineService, RoundOutcome, SessionError, SessionPhase, StaticFeed,
};

fn game_loop(feed: StaticFeed) -> GameLoopService {
    GameLoopService::new(fixed_clock(), HeadlineService::new(Arc::new(feed)))
}

#[tokio::test]
async fn full_game_solves_every_round() {
    let service = game_loop(StaticFeed::new([
        "Fed Raises Rates Sharply - Reuters",
        "Breaking News",
        "Stocks slide as Tesla stumbles - CNBC",
        "Storm batters Florida coast",
    ]));

    let mut session = service.start_session().await.unwrap();
    assert_eq!(session.total_rounds(), 3);

    while session.phase() == SessionPhase::InRound {
        let target = session.round().unwrap().target().to_lowercase();
        assert_eq!(session.check_guess("definitely wrong").unwrap(), GuessOutcome::Incorrect);
        assert_eq!(session.check_guess(&target).unwrap(), GuessOutcome::Correct);
        session.advance().unwrap();
    }

    assert!(session.is_finished());
    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(session.completed_at(), Some(fixed_now()));

    let progress = session.progress();
    assert_eq!(progress.solved, 3);
    assert_eq!(progress.skipped, 0);
    assert!(session.records().iter().all(|record| record.wrong_guesses == 1));
}

#[tokio::test]
async fn skipping_every_round_finishes_the_game() {
    let service = game_loop(StaticFeed::new([
        "Fed Raises Rates Sharply - Reuters",
        "Stocks slide as Tesla stumbles - CNBC",
    ]));

    let mut session = service.start_session().await.unwrap();
    session.skip().unwrap();
    assert_eq!(session.current_article().unwrap().source(), "CNBC");
    session.skip().unwrap();

    assert_eq!(session.phase(), SessionPhase::Finished);
    assert!(session
        .records()
        .iter()
        .all(|record| record.outcome == RoundOutcome::Skipped));
    assert_eq!(
        session.skip(),
        Err(SessionError::NotInRound {
            phase: SessionPhase::Finished
        })
    );
}

#[tokio::test]
async fn failed_fetch_never_starts_a_round() {
    let service = game_loop(StaticFeed::failing("connection refused"));

    let mut session = service.start_session().await.unwrap();
    assert_eq!(session.phase(), SessionPhase::FetchFailed);
    assert!(session.round().is_none());
    assert!(session.check_guess("anything").is_err());
}
