use std::sync::Arc;

use tracing::info;

use crate::error::SessionError;
use crate::headlines::{FeedConfig, HeadlineService, NewsApiFeed};
use crate::Clock;

use super::service::GameSession;

/// Orchestrates the single headline fetch and hands back a playable session.
#[derive(Clone)]
pub struct GameLoopService {
    clock: Clock,
    headlines: HeadlineService,
}

impl GameLoopService {
    #[must_use]
    pub fn new(clock: Clock, headlines: HeadlineService) -> Self {
        Self { clock, headlines }
    }

    /// Game loop backed by the public news API.
    #[must_use]
    pub fn news_api(clock: Clock, config: FeedConfig, round_limit: usize) -> Self {
        let feed = Arc::new(NewsApiFeed::new(config));
        Self::new(clock, HeadlineService::new(feed).with_round_limit(round_limit))
    }

    #[must_use]
    pub fn headlines(&self) -> &HeadlineService {
        &self.headlines
    }

    /// Fetch headlines once and resolve a fresh session with the result.
    ///
    /// A failed fetch is not an error here: the session comes back in
    /// `SessionPhase::FetchFailed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` only if the fresh session refuses the load.
    pub async fn start_session(&self) -> Result<GameSession, SessionError> {
        let mut session = GameSession::loading(self.clock);
        info!(round_limit = self.headlines.round_limit(), "fetching today's headlines");
        let fetched = self.headlines.fetch().await;
        session.load(fetched)?;
        Ok(session)
    }
}
