use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    FailedScreenVm, FinishedScreenVm, GameIntent, GameScreenVm, GameVm, GuessField, RoundScreenVm,
    ScreenBodyVm, WonScreenVm, headline_title,
};

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let game_loop = ctx.game_loop();
    let round_limit = ctx.round_limit();
    let vm = use_signal(|| None::<GameVm>);
    let error = use_signal(|| None::<ViewError>);

    // The fetch happens exactly once per resource run; the session it yields
    // lives in `vm` from then on.
    let resource = use_resource(move || {
        let game_loop = game_loop.clone();
        async move {
            let mut vm = vm;
            let session = game_loop
                .start_session()
                .await
                .map_err(|_| ViewError::Unknown)?;
            vm.set(Some(GameVm::new(session, round_limit)));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Some(vm) => vm.apply(intent).map(|_| ()),
            None => Err(ViewError::Unknown),
        };
        error.set(result.err());
    });

    let state = view_state_from_resource(&resource);
    let screen = vm.read().as_ref().map(GameVm::screen);
    let field_text = vm
        .read()
        .as_ref()
        .map(|vm| vm.field().text().to_string())
        .unwrap_or_default();
    let title = headline_title(round_limit);

    rsx! {
        div { class: "game",
            match (state, screen) {
                (ViewState::Ready(()), Some(screen)) => rsx! {
                    GameScreen { screen, field_text, on_intent: dispatch }
                },
                (ViewState::Error(err), _) => rsx! {
                    header { class: "game-header",
                        h1 { class: "game-title", "{title}" }
                    }
                    p { class: "game-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                _ => rsx! {
                    header { class: "game-header",
                        h1 { class: "game-title", "{title}" }
                        p { class: "game-counter", "LOADING..." }
                    }
                },
            }
            if let Some(err) = error() {
                p { class: "game-notice", "{err.message()}" }
            }
        }
    }
}

#[component]
pub fn GameScreen(
    screen: GameScreenVm,
    field_text: String,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    rsx! {
        header { class: "game-header",
            h1 { class: "game-title", "{screen.title}" }
            p { class: "game-edition", "{screen.edition}" }
        }
        match screen.body {
            ScreenBodyVm::Loading => rsx! {
                p { class: "game-counter", "LOADING..." }
            },
            ScreenBodyVm::Failed(failed) => rsx! {
                FailedPanel { failed }
            },
            ScreenBodyVm::Round(round) => rsx! {
                RoundPanel { round, field_text, on_intent }
            },
            ScreenBodyVm::Won(won) => rsx! {
                WonPanel { won, on_intent }
            },
            ScreenBodyVm::Finished(finished) => rsx! {
                FinishedPanel { finished }
            },
        }
    }
}

#[component]
pub fn RoundPanel(
    round: RoundScreenVm,
    field_text: String,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    rsx! {
        section { class: "round",
            p { class: "round-subhead", "{round.subhead}" }
            p { class: "round-counter", "{round.counter}" }
            p { class: "round-headline", "{round.headline}" }
            p { class: "round-source", "{round.source}" }
            input {
                id: "guess-input",
                class: "guess-input",
                r#type: "text",
                autocomplete: "off",
                placeholder: GuessField::PLACEHOLDER,
                value: "{field_text}",
                onfocus: move |_| on_intent.call(GameIntent::Focus),
                onblur: move |_| on_intent.call(GameIntent::Blur),
                oninput: move |evt: FormEvent| on_intent.call(GameIntent::Input(evt.value())),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(GameIntent::Submit);
                    }
                },
            }
            button {
                class: "btn btn-primary guess-submit",
                r#type: "button",
                onclick: move |_| on_intent.call(GameIntent::Submit),
                "SUBMIT GUESS"
            }
            button {
                class: "btn btn-link round-skip",
                r#type: "button",
                onclick: move |_| on_intent.call(GameIntent::Skip),
                "SKIP TO NEXT \u{203a}"
            }
        }
    }
}

#[component]
pub fn WonPanel(won: WonScreenVm, on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        section { class: "popup popup--won",
            h2 { class: "popup-title", "CORRECT!" }
            p { class: "popup-answer", "{won.answer}" }
            p { class: "popup-message", "{won.headline}" }
            p { class: "round-source", "{won.source}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(GameIntent::Next),
                "NEXT HEADLINE"
            }
        }
    }
}

#[component]
pub fn FinishedPanel(finished: FinishedScreenVm) -> Element {
    rsx! {
        section { class: "popup popup--finished",
            h2 { class: "popup-title", "FINISH" }
            p { class: "popup-message", "{finished.message}" }
            p { class: "popup-message", "{finished.detail}" }
            if !finished.recap.is_empty() {
                ul { class: "recap",
                    for line in finished.recap.iter() {
                        li { class: "recap-line",
                            span { class: "recap-answer", "{line.answer}" }
                            span { class: "recap-status", "{line.status}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dioxus::desktop::window().close(),
                "CLOSE GAME"
            }
        }
    }
}

#[component]
fn FailedPanel(failed: FailedScreenVm) -> Element {
    rsx! {
        section { class: "round",
            p { class: "round-headline round-headline--error", "{failed.message}" }
            if let Some(detail) = failed.detail.as_ref() {
                p { class: "round-source", "{detail}" }
            }
        }
    }
}
