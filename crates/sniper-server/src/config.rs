//! Server configuration from the environment

use std::time::Duration;

use defi_sniper::DexScreenerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,

    /// Budget for one resolve + score round trip
    pub request_timeout: Duration,

    pub dexscreener: DexScreenerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            dexscreener: DexScreenerConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let request_timeout = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid REQUEST_TIMEOUT_MS");
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            request_timeout,
            dexscreener: DexScreenerConfig {
                base_url: lookup("DEXSCREENER_BASE_URL").unwrap_or(defaults.dexscreener.base_url),
                user_agent: lookup("DEXSCREENER_USER_AGENT")
                    .unwrap_or(defaults.dexscreener.user_agent),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.dexscreener.base_url, "https://api.dexscreener.com/latest/dex");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("DEXSCREENER_BASE_URL", "http://localhost:4000/dex"),
        ]);
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.dexscreener.base_url, "http://localhost:4000/dex");
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        assert_eq!(
            config(&[("REQUEST_TIMEOUT_MS", "soon")]).request_timeout,
            Duration::from_secs(10)
        );
        assert_eq!(
            config(&[("REQUEST_TIMEOUT_MS", "0")]).request_timeout,
            Duration::from_secs(10)
        );
    }
}
