use std::sync::Arc;

use newsword_core::model::Article;
use tracing::{debug, info};

use super::feed::HeadlineFeed;
use crate::error::FetchError;

/// Maximum number of rounds drawn from one fetch.
pub const ROUND_LIMIT: usize = 5;

/// Turns raw feed headlines into playable articles.
#[derive(Clone)]
pub struct HeadlineService {
    feed: Arc<dyn HeadlineFeed>,
    round_limit: usize,
}

impl HeadlineService {
    #[must_use]
    pub fn new(feed: Arc<dyn HeadlineFeed>) -> Self {
        Self {
            feed,
            round_limit: ROUND_LIMIT,
        }
    }

    /// Caps the number of articles returned by `fetch`; at least one round is kept.
    #[must_use]
    pub fn with_round_limit(mut self, round_limit: usize) -> Self {
        self.round_limit = round_limit.max(1);
        self
    }

    #[must_use]
    pub fn round_limit(&self) -> usize {
        self.round_limit
    }

    /// Fetch headlines once and keep the first `round_limit` playable ones.
    ///
    /// There is no retry; a failed request is reported as-is.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the underlying feed fails.
    pub async fn fetch(&self) -> Result<Vec<Article>, FetchError> {
        let titles = self.feed.fetch_titles().await?;
        let articles = select_articles(titles.iter().map(String::as_str), self.round_limit);
        info!(
            headlines = titles.len(),
            rounds = articles.len(),
            "fetched headlines"
        );
        Ok(articles)
    }
}

/// Builds up to `limit` articles, silently dropping headlines with no target word.
#[must_use]
pub fn select_articles<'a>(titles: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<Article> {
    let mut articles = Vec::with_capacity(limit);
    for title in titles {
        if articles.len() >= limit {
            break;
        }
        match Article::from_headline(title) {
            Some(article) => articles.push(article),
            None => debug!(title, "skipping headline without a target word"),
        }
    }
    articles
}
