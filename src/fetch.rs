use crate::{PageFetcher, ScorecardError};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.espncricinfo.com";
pub const BASE_URL_ENV: &str = "SCORECARD_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardConfig {
    pub base_url: String,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        ScorecardConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ScorecardConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        ScorecardConfig {
            base_url: base_url.into(),
        }
    }

    /// Base URL from `SCORECARD_BASE_URL`, falling back to the default host.
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(ScorecardConfig::new)
            .unwrap_or_default()
    }

    pub fn scorecard_url(&self, series_id: &str, match_id: &str) -> String {
        format!(
            "{}/series/{}/scorecard/{}",
            self.base_url.trim_end_matches('/'),
            series_id,
            match_id
        )
    }
}

/// Plain GET against the scorecard URL.
///
/// The body is returned whatever the status code; an error page simply fails
/// later when its structure does not match.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    config: ScorecardConfig,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: ScorecardConfig) -> Self {
        HttpFetcher {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ScorecardConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, series_id: &str, match_id: &str) -> Result<String, ScorecardError> {
        let url = self.config.scorecard_url(series_id, match_id);
        debug!("Visit {}", url);

        let response = self.client.get(&url).send().await?;
        debug!("{} responded {}", url, response.status());

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_scorecard_url() {
        let config = ScorecardConfig::default();
        assert_eq!(
            config.scorecard_url("ipl-2021-1249214", "mumbai-indians-vs-rcb-1st-match-1254058"),
            "https://www.espncricinfo.com/series/ipl-2021-1249214/scorecard/mumbai-indians-vs-rcb-1st-match-1254058"
        );

        let config = ScorecardConfig::new("http://localhost:8080/");
        assert_eq!(
            config.scorecard_url("s", "m"),
            "http://localhost:8080/series/s/scorecard/m"
        );
    }

    #[test]
    fn base_url_from_env() {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:9000");
        assert_eq!(ScorecardConfig::from_env().base_url, "http://127.0.0.1:9000");

        std::env::set_var(BASE_URL_ENV, "  ");
        assert_eq!(ScorecardConfig::from_env(), ScorecardConfig::default());

        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ScorecardConfig::from_env().base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn fetches_body_from_template_path() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/series/s-1/scorecard/m-2")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>ok</body></html>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(ScorecardConfig::new(server.url()));
        let body = fetcher.fetch("s-1", "m-2").await.unwrap();

        assert_eq!(body, "<html><body>ok</body></html>");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_still_returns_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/series/x/scorecard/y")
            .with_status(404)
            .with_body("<html><body>Page not found</body></html>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(ScorecardConfig::new(server.url()));
        let body = fetcher.fetch("x", "y").await.unwrap();

        assert!(body.contains("Page not found"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let fetcher = HttpFetcher::new(ScorecardConfig::new("http://127.0.0.1:1"));
        let err = crate::cricinfo::extract_batting(&fetcher, "s", "m")
            .await
            .unwrap_err();

        assert!(matches!(err, ScorecardError::Transport(_)));
        assert!(!err.is_mismatch());
    }
}
