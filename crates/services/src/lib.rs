#![forbid(unsafe_code)]

pub mod error;
pub mod headlines;
pub mod sessions;

pub use newsword_core::Clock;

pub use error::{FetchError, SessionError};
pub use headlines::{
    DEFAULT_BASE_URL, DEFAULT_COUNTRY, FeedConfig, HeadlineFeed, HeadlineService, NewsApiFeed,
    ROUND_LIMIT, StaticFeed,
};
pub use sessions::{
    GameLoopService, GameSession, RoundOutcome, RoundRecord, SessionPhase, SessionProgress,
};
