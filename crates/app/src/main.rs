use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use newsword_core::Clock;
use services::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, FeedConfig, GameLoopService, ROUND_LIMIT};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "Top 5 News Wordle";

/// Guess the hidden word in today's top headlines.
#[derive(Debug, Parser)]
#[command(name = "newsword", version, about)]
struct Cli {
    /// API key for the news service
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Two-letter country code for top headlines
    #[arg(long, env = "NEWS_API_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Base URL of the news service
    #[arg(long, env = "NEWS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Maximum number of headlines per game
    #[arg(long, env = "NEWS_ROUND_LIMIT", default_value_t = ROUND_LIMIT)]
    rounds: usize,
}

impl Cli {
    fn feed_config(&self) -> FeedConfig {
        FeedConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_country(self.country.clone())
    }
}

struct DesktopApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for DesktopApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

fn init_tracing() {
    // RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) {
    let config = cli.feed_config();
    if config.api_key.is_none() {
        warn!("NEWS_API_KEY is not set; the game will open in its offline state");
    }
    info!(?config, rounds = cli.rounds, "starting newsword");

    let game_loop = Arc::new(GameLoopService::news_api(
        Clock::default_clock(),
        config,
        cli.rounds,
    ));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { game_loop });
    let context = build_app_context(&app);

    // tao can default to an always-on-top window in some macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1000.0, 800.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => err.exit(),
    };

    run(cli);
}
