use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use newsword_core::time::fixed_clock;
use services::{GameLoopService, HeadlineService, StaticFeed};

use crate::context::{UiApp, build_app_context};
use crate::views::{GameScreen, GameView};
use crate::vm::GameScreenVm;

#[derive(Clone)]
struct TestApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for TestApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

#[derive(Props, Clone)]
struct GameHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { GameView {} }
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: GameScreenVm,
    field_text: String,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    rsx! {
        GameScreen {
            screen: props.screen.clone(),
            field_text: props.field_text.clone(),
            on_intent: move |_| {},
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until pending resources have settled.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness running the full `GameView` against a fixed feed.
pub fn setup_game_harness(feed: StaticFeed) -> ViewHarness {
    let headlines = HeadlineService::new(Arc::new(feed));
    let app = Arc::new(TestApp {
        game_loop: Arc::new(GameLoopService::new(fixed_clock(), headlines)),
    });
    let dom = VirtualDom::new_with_props(GameHarness, GameHarnessProps { app });
    ViewHarness { dom }
}

/// Harness rendering a prepared screen without any services behind it.
pub fn setup_screen_harness(screen: GameScreenVm, field_text: &str) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ScreenHarness,
        ScreenHarnessProps {
            screen,
            field_text: field_text.to_string(),
        },
    );
    ViewHarness { dom }
}
