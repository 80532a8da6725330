use std::fmt;

/// Base URL of the public news API.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Country whose top headlines are requested when none is configured.
pub const DEFAULT_COUNTRY: &str = "us";

/// Connection settings for the remote headline feed.
#[derive(Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub country: String,
}

impl FeedConfig {
    /// Settings for the public endpoint. A blank key is treated as missing.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    #[must_use]
    pub fn top_headlines_url(&self) -> String {
        format!("{}/top-headlines", self.base_url.trim_end_matches('/'))
    }
}

// Keeps the key out of logs.
impl fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("country", &self.country)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_treated_as_missing() {
        assert_eq!(FeedConfig::new(Some("   ".into())).api_key, None);
        assert_eq!(
            FeedConfig::new(Some("abc".into())).api_key.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn url_ignores_trailing_slash() {
        let config = FeedConfig::new(None).with_base_url("http://localhost:9000/v2/");
        assert_eq!(
            config.top_headlines_url(),
            "http://localhost:9000/v2/top-headlines"
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = FeedConfig::new(Some("super-secret".into()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"), "{rendered}");
        assert!(rendered.contains("<redacted>"), "{rendered}");
    }
}
