//! Odds feed REST API client with rate limiting.
//!
//! Provides typed access to the game-odds and player-odds endpoints with
//! automatic rate limiting using the governor crate.
//!
//! # Example
//!
//! ```ignore
//! use fairline_core::{OddsRequest, Sportsbook};
//! use fairline_odds_api::{OddsApiClient, OddsApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OddsApiClient::new(OddsApiConfig::default().with_api_key("secret"))?;
//!
//!     let request = OddsRequest {
//!         sport: "hockey".to_string(),
//!         league: "nhl".to_string(),
//!         sportsbook: Sportsbook::from("DraftKings"),
//!         live: false,
//!     };
//!     let rows = client.get_game_odds(&request).await?;
//!     println!("Fetched {} quote rows", rows.len());
//!
//!     Ok(())
//! }
//! ```

use crate::error::{OddsApiError, Result};
use crate::types::RawQuoteRow;
use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use std::num::NonZeroU32;
use std::sync::Arc;

use fairline_core::{OddsRequest, OddsSource, QuoteRow};

// =============================================================================
// Constants
// =============================================================================

/// Default odds feed base URL.
pub const ODDS_API_URL: &str = "https://api.oddsfeed.io";

/// Game-level markets endpoint (spreads, totals, moneylines).
const GAME_ODDS_PATH: &str = "/v1/game-odds";

/// Player prop markets endpoint.
const PLAYER_ODDS_PATH: &str = "/v1/player-odds";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the odds feed client.
#[derive(Debug, Clone)]
pub struct OddsApiConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// API key sent as the `key` query parameter.
    pub api_key: String,

    /// Requests per minute limit.
    pub requests_per_minute: NonZeroU32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: ODDS_API_URL.to_string(),
            api_key: String::new(),
            requests_per_minute: nonzero!(60u32),
            timeout_secs: 30,
        }
    }
}

impl OddsApiConfig {
    /// Builds a config from the loaded application settings.
    #[must_use]
    pub fn from_settings(settings: &fairline_core::OddsApiSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            requests_per_minute: NonZeroU32::new(settings.requests_per_minute)
                .unwrap_or(nonzero!(60u32)),
            timeout_secs: settings.timeout_secs,
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the rate limit.
    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_minute: NonZeroU32) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// =============================================================================
// OddsApiClient
// =============================================================================

/// Odds feed REST API client.
///
/// All requests are rate-limited and carry the configured API key.
pub struct OddsApiClient {
    /// Configuration.
    config: OddsApiConfig,

    /// HTTP client.
    http: Client,

    /// Rate limiter.
    rate_limiter: Arc<
        RateLimiter<
            governor::state::NotKeyed,
            governor::state::InMemoryState,
            governor::clock::DefaultClock,
        >,
    >,
}

impl std::fmt::Debug for OddsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OddsApiClient")
            .field("base_url", &self.config.base_url)
            .field("requests_per_minute", &self.config.requests_per_minute)
            .finish_non_exhaustive()
    }
}

impl OddsApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: OddsApiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(OddsApiError::Configuration(
                "odds feed API key is not set".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OddsApiError::Network(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_minute(config.requests_per_minute);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            config,
            http,
            rate_limiter,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Waits for rate limiter and fetches one quote endpoint.
    async fn get_quotes(&self, path: &str, request: &OddsRequest) -> Result<Vec<QuoteRow>> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.config.base_url, path);

        tracing::debug!(
            sport = %request.sport,
            league = %request.league,
            sportsbook = %request.sportsbook,
            "GET {}",
            url
        );

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("sport", request.sport.as_str()),
                ("league", request.league.as_str()),
                ("sportsbook", request.sportsbook.as_str()),
                ("is_live", if request.live { "true" } else { "false" }),
            ])
            .send()
            .await?;

        let raw: Vec<RawQuoteRow> = self.handle_response(response).await?;
        Ok(raw.into_iter().map(QuoteRow::from).collect())
    }

    /// Handles API response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(OddsApiError::rate_limit(retry_after));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OddsApiError::api(status.as_u16(), text));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    // =========================================================================
    // Quote Endpoints
    // =========================================================================

    /// Fetches game-level quote rows (spreads, totals, moneylines).
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn get_game_odds(&self, request: &OddsRequest) -> Result<Vec<QuoteRow>> {
        self.get_quotes(GAME_ODDS_PATH, request).await
    }

    /// Fetches player prop quote rows.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn get_player_odds(&self, request: &OddsRequest) -> Result<Vec<QuoteRow>> {
        self.get_quotes(PLAYER_ODDS_PATH, request).await
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_game_quotes(&self, request: &OddsRequest) -> anyhow::Result<Vec<QuoteRow>> {
        Ok(self.get_game_odds(request).await?)
    }

    async fn fetch_player_quotes(&self, request: &OddsRequest) -> anyhow::Result<Vec<QuoteRow>> {
        Ok(self.get_player_odds(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairline_core::Sportsbook;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> OddsRequest {
        OddsRequest {
            sport: "hockey".to_string(),
            league: "nhl".to_string(),
            sportsbook: Sportsbook::from("DraftKings"),
            live: false,
        }
    }

    fn test_client(base_url: &str) -> OddsApiClient {
        OddsApiClient::new(
            OddsApiConfig::default()
                .with_base_url(base_url)
                .with_api_key("test-key"),
        )
        .unwrap()
    }

    // ==================== Config Tests ====================

    #[test]
    fn test_config_default() {
        let config = OddsApiConfig::default();
        assert_eq!(config.base_url, ODDS_API_URL);
        assert_eq!(config.requests_per_minute.get(), 60);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = OddsApiConfig::default()
            .with_base_url("https://custom.url")
            .with_api_key("secret")
            .with_rate_limit(nonzero!(120u32))
            .with_timeout_secs(60);

        assert_eq!(config.base_url, "https://custom.url");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.requests_per_minute.get(), 120);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_config_from_settings() {
        let settings = fairline_core::OddsApiSettings {
            base_url: "https://feed.example".to_string(),
            api_key: "k".to_string(),
            requests_per_minute: 30,
            timeout_secs: 10,
        };
        let config = OddsApiConfig::from_settings(&settings);
        assert_eq!(config.base_url, "https://feed.example");
        assert_eq!(config.requests_per_minute.get(), 30);
    }

    #[test]
    fn test_new_rejects_missing_api_key() {
        let result = OddsApiClient::new(OddsApiConfig::default());
        assert!(matches!(result, Err(OddsApiError::Configuration(_))));
    }

    // ==================== Endpoint Tests ====================

    #[tokio::test]
    async fn test_get_game_odds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/game-odds"))
            .and(query_param("key", "test-key"))
            .and(query_param("sport", "hockey"))
            .and(query_param("league", "nhl"))
            .and(query_param("sportsbook", "DraftKings"))
            .and(query_param("is_live", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "game_id": "g1",
                    "game_name": "Stars vs Blues",
                    "market_name": "Total",
                    "bet_name": "Over 5.5",
                    "line": 5.5,
                    "sportsbook": "Pinnacle",
                    "odds": -110
                },
                {
                    "game_id": "g1",
                    "game_name": "Stars vs Blues",
                    "market_name": "Point Spread",
                    "bet_name": "Dallas Stars -1.5",
                    "line": "-1.5",
                    "sportsbook": "Pinnacle",
                    "odds": 150
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let rows = client.get_game_odds(&request()).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, Some(dec!(5.5)));
        assert_eq!(rows[1].line, Some(dec!(-1.5)));
        assert_eq!(rows[1].sportsbook, Sportsbook::from("Pinnacle"));
    }

    #[tokio::test]
    async fn test_get_player_odds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/player-odds"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "game_id": "g1",
                    "game_name": "Stars vs Blues",
                    "market_name": "Player Shots On Goal",
                    "bet_name": "Over 2.5",
                    "line": 2.5,
                    "player_name": "J. Robertson",
                    "sportsbook": "DraftKings",
                    "odds": -115
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let rows = client.get_player_odds(&request()).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player.as_deref(), Some("J. Robertson"));
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/game-odds"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.get_game_odds(&request()).await.unwrap_err();

        assert!(matches!(
            err,
            OddsApiError::Api {
                status_code: 401,
                ..
            }
        ));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_rate_limit_status_maps_to_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/game-odds"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "15"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.get_game_odds(&request()).await.unwrap_err();

        assert!(matches!(
            err,
            OddsApiError::RateLimit {
                retry_after_secs: 15
            }
        ));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_empty_body_yields_empty_rows() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/game-odds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let rows = client.get_game_odds(&request()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_odds_source_impl() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/game-odds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let source: &dyn OddsSource = &client;
        let rows = source.fetch_game_quotes(&request()).await.unwrap();
        assert!(rows.is_empty());
    }
}
