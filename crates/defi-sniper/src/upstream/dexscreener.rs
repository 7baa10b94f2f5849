//! DexScreener HTTP Client
//!
//! Endpoints:
//! - `{base}/pairs/{chainId}/{pairAddress}`
//! - `{base}/tokens/{tokenAddress}`
//! - `{base}/search?q={query}`

use async_trait::async_trait;
use reqwest::Url;

use super::{Endpoint, MarketDataClient};
use crate::error::{Result, SniperError};

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com/latest/dex";

/// DexScreener client configuration
#[derive(Clone, Debug)]
pub struct DexScreenerConfig {
    /// API root, without a trailing endpoint segment
    pub base_url: String,

    pub user_agent: String,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: concat!("defi-sniper/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl DexScreenerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("DEXSCREENER_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: std::env::var("DEXSCREENER_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

pub struct DexScreenerClient {
    http: reqwest::Client,
    base: Url,
}

impl DexScreenerClient {
    pub fn new(config: &DexScreenerConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| SniperError::Config(format!("invalid base url '{}': {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(SniperError::Config(format!(
                "base url '{}' cannot carry path segments",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SniperError::Config(format!("http client: {e}")))?;

        Ok(Self { http, base })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&DexScreenerConfig::from_env())
    }

    /// Build the request URL, percent-encoding caller input
    pub fn url_for(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match endpoint {
                Endpoint::Pair { chain, address } => {
                    segments.extend(["pairs", chain.as_str(), address.as_str()]);
                }
                Endpoint::TokenPairs { address } => {
                    segments.extend(["tokens", address.as_str()]);
                }
                Endpoint::Search { .. } => {
                    segments.push("search");
                }
            }
        }
        if let Endpoint::Search { query } = endpoint {
            url.query_pairs_mut().append_pair("q", query);
        }
        url
    }
}

#[async_trait]
impl MarketDataClient for DexScreenerClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value> {
        let url = self.url_for(endpoint);
        tracing::debug!(%endpoint, %url, "querying market data");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SniperError::transport(endpoint, e.status().map(|s| s.as_u16()), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SniperError::transport(
                endpoint,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SniperError::transport(endpoint, Some(status.as_u16()), e))?;

        serde_json::from_str(&body).map_err(|e| SniperError::parse(endpoint, e))
    }

    fn name(&self) -> &str {
        "DexScreener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DexScreenerClient {
        DexScreenerClient::new(&DexScreenerConfig {
            base_url: base.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let dex = client(DEFAULT_BASE_URL);

        let pair = dex.url_for(&Endpoint::Pair {
            chain: "ethereum".into(),
            address: "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640".into(),
        });
        assert_eq!(
            pair.as_str(),
            "https://api.dexscreener.com/latest/dex/pairs/ethereum/0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640"
        );

        let token = dex.url_for(&Endpoint::TokenPairs {
            address: "So11111111111111111111111111111111111111112".into(),
        });
        assert!(token.as_str().ends_with("/latest/dex/tokens/So11111111111111111111111111111111111111112"));
    }

    #[test]
    fn test_search_query_is_encoded() {
        let dex = client("https://example.test/latest/dex/");
        let url = dex.url_for(&Endpoint::Search {
            query: "PEPE/WETH & co".into(),
        });
        assert_eq!(url.path(), "/latest/dex/search");
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned()),
            Some("PEPE/WETH & co".to_string())
        );
    }

    #[test]
    fn test_path_input_cannot_escape_segment() {
        let dex = client(DEFAULT_BASE_URL);
        let url = dex.url_for(&Endpoint::TokenPairs {
            address: "../search".into(),
        });
        assert!(url.path().starts_with("/latest/dex/tokens/"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = DexScreenerClient::new(&DexScreenerConfig {
            base_url: "not a url".into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(SniperError::Config(_))));
    }
}
