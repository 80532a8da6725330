mod config;
mod feed;
mod service;

pub use config::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, FeedConfig};
pub use feed::{HeadlineFeed, NewsApiFeed, StaticFeed};
pub use service::{HeadlineService, ROUND_LIMIT, select_articles};
