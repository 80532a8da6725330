use newsword_core::model::Article;
use newsword_core::time::fixed_clock;
use services::{GameSession, StaticFeed};

use super::test_harness::{setup_game_harness, setup_screen_harness};
use crate::vm::map_game_screen;

fn session() -> GameSession {
    let articles = vec![
        Article::from_headline("Fed Raises Rates Sharply - Reuters").unwrap(),
        Article::from_headline("Storm batters Florida coast - CNN").unwrap(),
    ];
    GameSession::with_articles(articles, fixed_clock())
}

#[test]
fn round_screen_renders_masked_headline() {
    let mut harness = setup_screen_harness(map_game_screen(&session(), 5), "");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("TOP 5 DAILY HEADLINES"), "missing title in {html}");
    assert!(html.contains("GUESS THE 6 LETTER SUBJECT"), "missing subhead in {html}");
    assert!(html.contains("HEADLINE 1 OF 2"), "missing counter in {html}");
    assert!(html.contains("Fed _ _ _ _ _ _ Rates Sharply"), "missing headline in {html}");
    assert!(html.contains("SOURCE: Reuters"), "missing source in {html}");
    assert!(html.contains("SUBMIT GUESS"), "missing submit in {html}");
    assert!(!html.contains("Raises"), "target leaked in {html}");
}

#[test]
fn won_screen_renders_answer() {
    let mut session = session();
    session.check_guess("RAISES").unwrap();
    let mut harness = setup_screen_harness(map_game_screen(&session, 5), "");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("CORRECT!"), "missing title in {html}");
    assert!(html.contains("RAISES"), "missing answer in {html}");
    assert!(html.contains("NEXT HEADLINE"), "missing next button in {html}");
}

#[test]
fn finished_screen_renders_recap() {
    let mut session = session();
    session.skip().unwrap();
    session.check_guess("florida").unwrap();
    session.advance().unwrap();
    let mut harness = setup_screen_harness(map_game_screen(&session, 5), "");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("MISSION ACCOMPLISHED"), "missing message in {html}");
    assert!(html.contains("SKIPPED"), "missing skipped line in {html}");
    assert!(html.contains("SOLVED FIRST TRY"), "missing solved line in {html}");
    assert!(html.contains("CLOSE GAME"), "missing close button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_loads_first_round() {
    let mut harness = setup_game_harness(StaticFeed::new([
        "Breaking News",
        "Fed Raises Rates Sharply - Reuters",
    ]));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("HEADLINE 1 OF 1"), "missing counter in {html}");
    assert!(html.contains("Fed _ _ _ _ _ _ Rates Sharply"), "missing headline in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_fetch_failure() {
    let mut harness = setup_game_harness(StaticFeed::failing("offline"));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("OFFLINE / ERROR"), "missing error in {html}");
    assert!(html.contains("headline feed unavailable: offline"), "missing detail in {html}");
}
