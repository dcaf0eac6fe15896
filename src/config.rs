use std::env;
use std::time::Duration;

use crate::errors::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Pre-issued bearer token, sent verbatim when present.
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Read `PAYMENTS_API_BASE_URL`, `PAYMENTS_HTTP_TIMEOUT_SECS` and
    /// `PAYMENTS_ACCESS_TOKEN`, after loading any `.env` file.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let base_url =
            lookup("PAYMENTS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match lookup("PAYMENTS_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ClientError::Config(format!("PAYMENTS_HTTP_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let access_token = lookup("PAYMENTS_ACCESS_TOKEN").filter(|t| !t.is_empty());

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("PAYMENTS_API_BASE_URL", "http://localhost:9000"),
            ("PAYMENTS_HTTP_TIMEOUT_SECS", "5"),
            ("PAYMENTS_ACCESS_TOKEN", "token-123"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.access_token.as_deref(), Some("token-123"));
    }

    #[test]
    fn empty_token_is_ignored() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("PAYMENTS_ACCESS_TOKEN", "")])).unwrap();
        assert!(config.access_token.is_none());
    }

    #[test]
    fn invalid_timeout_is_a_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[("PAYMENTS_HTTP_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
