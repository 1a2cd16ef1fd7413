use std::env;
use url::Url;

use minfraud::DEFAULT_BASE_URL;

/// Credentials and target for a [`crate::MinFraudClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// MaxMind account ID, sent as the Basic auth username.
    pub account_id: String,
    /// License key, sent as the Basic auth password.
    pub license_key: String,
    /// Service root, e.g. `https://minfraud.maxmind.com/minfraud/v2.0`.
    pub base_url: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("account_id", &self.account_id)
            .field("license_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(account_id: impl Into<String>, license_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            license_key: license_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read `MINFRAUD_ACCOUNT_ID`, `MINFRAUD_LICENSE_KEY` and the optional
    /// `MINFRAUD_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let account_id = lookup("MINFRAUD_ACCOUNT_ID")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingRequired("MINFRAUD_ACCOUNT_ID"))?;

        let license_key = lookup("MINFRAUD_LICENSE_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingRequired("MINFRAUD_LICENSE_KEY"))?;

        let base_url = lookup("MINFRAUD_BASE_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        if !base_url.starts_with("https://") {
            tracing::warn!(base_url = %base_url, "minFraud base URL is not HTTPS; credentials will be sent in clear text");
        }

        Ok(Self {
            account_id,
            license_key,
            base_url,
        })
    }
}

/// Accept only absolute http(s) URLs.
pub fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base_url).map_err(|_| ConfigError::InvalidUrl(base_url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(base_url.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingRequired(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MINFRAUD_ACCOUNT_ID", "123456"),
            ("MINFRAUD_LICENSE_KEY", "abc123"),
        ]))
        .unwrap();
        assert_eq!(config.account_id, "123456");
        assert_eq!(config.license_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_license_key() {
        let err = ClientConfig::from_lookup(lookup(&[("MINFRAUD_ACCOUNT_ID", "123456")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired("MINFRAUD_LICENSE_KEY")
        ));
    }

    #[test]
    fn test_empty_account_id_counts_as_missing() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("MINFRAUD_ACCOUNT_ID", ""),
            ("MINFRAUD_LICENSE_KEY", "abc123"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired("MINFRAUD_ACCOUNT_ID")
        ));
    }

    #[test]
    fn test_custom_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MINFRAUD_ACCOUNT_ID", "123456"),
            ("MINFRAUD_LICENSE_KEY", "abc123"),
            ("MINFRAUD_BASE_URL", "https://sandbox.maxmind.com/minfraud/v2.0"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://sandbox.maxmind.com/minfraud/v2.0");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        for bad in ["not a url", "ftp://minfraud.maxmind.com/minfraud/v2.0"] {
            let err = ClientConfig::from_lookup(lookup(&[
                ("MINFRAUD_ACCOUNT_ID", "123456"),
                ("MINFRAUD_LICENSE_KEY", "abc123"),
                ("MINFRAUD_BASE_URL", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl(_)));
        }
    }

    #[test]
    fn test_debug_redacts_license_key() {
        let config = ClientConfig::new("123456", "super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("123456"));
        assert!(!debug.contains("super-secret"));
    }
}
