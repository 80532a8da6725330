use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::config::FeedConfig;
use crate::error::FetchError;

/// Source of raw headline strings (`"Body text - Outlet"`).
#[async_trait]
pub trait HeadlineFeed: Send + Sync {
    /// Fetch the current top headlines in feed order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the feed cannot be reached or its response is unusable.
    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError>;
}

//
// ─── NEWS API ──────────────────────────────────────────────────────────────────
//

/// Top-headlines client for the public news API.
#[derive(Clone, Debug)]
pub struct NewsApiFeed {
    client: Client,
    config: FeedConfig,
}

impl NewsApiFeed {
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl HeadlineFeed for NewsApiFeed {
    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey)?;

        let url = self.config.top_headlines_url();
        debug!(%url, country = %self.config.country, "requesting top headlines");

        let response = self
            .client
            .get(url)
            .query(&[("country", self.config.country.as_str()), ("apiKey", api_key)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "headline feed returned an error status");
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => FetchError::Api {
                    code: err.code,
                    message: err.message,
                },
                Err(_) => FetchError::HttpStatus(status),
            });
        }

        let payload: TopHeadlinesResponse = serde_json::from_str(&body)?;
        if payload.status.as_deref() == Some("error") {
            return Err(FetchError::Api {
                code: payload.code.unwrap_or_default(),
                message: payload.message.unwrap_or_default(),
            });
        }

        let titles: Vec<String> = payload
            .articles
            .into_iter()
            .map(|article| article.title)
            .collect();
        debug!(count = titles.len(), "received top headlines");
        Ok(titles)
    }
}

#[derive(Debug, Deserialize)]
struct TopHeadlinesResponse {
    status: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

//
// ─── STATIC FEED ───────────────────────────────────────────────────────────────
//

/// Fixed list of headlines, or a canned failure.
#[derive(Clone, Debug, Default)]
pub struct StaticFeed {
    titles: Vec<String>,
    failure: Option<String>,
}

impl StaticFeed {
    #[must_use]
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// A feed whose every fetch fails with `FetchError::Unavailable`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            titles: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl HeadlineFeed for StaticFeed {
    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError> {
        match &self.failure {
            Some(message) => Err(FetchError::Unavailable(message.clone())),
            None => Ok(self.titles.clone()),
        }
    }
}
