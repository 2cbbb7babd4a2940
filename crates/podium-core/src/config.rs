use std::time::Duration;

use url::Url;

use crate::error::AppError;
use crate::retry::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://www.nuitdelinfo.com";
pub const DEFAULT_PRINCIPAL_CHALLENGE: &str = "174";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; PodiumScraper/0.1)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for fetching and addressing the scraped site.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Total fetch attempts per page.
    pub max_retries: u32,
    pub user_agent: String,
    /// Site root every page path is resolved against.
    pub base_url: Url,
    /// Challenge whose teams `/teams-principal` lists.
    pub principal_challenge: String,
}

impl ScraperConfig {
    /// Read configuration from environment variables.
    ///
    /// - `REQUEST_TIMEOUT` (seconds, defaults to 10)
    /// - `MAX_RETRIES` (defaults to 3, must be at least 1)
    /// - `USER_AGENT`
    /// - `PODIUM_BASE_URL` (defaults to `https://www.nuitdelinfo.com`)
    /// - `PODIUM_PRINCIPAL_CHALLENGE` (defaults to `174`)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let timeout_secs = match lookup("REQUEST_TIMEOUT") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid REQUEST_TIMEOUT '{raw}': must be a number of seconds"
                ))
            })?,
        };

        let max_retries = match lookup("MAX_RETRIES") {
            None => DEFAULT_MAX_RETRIES,
            Some(raw) => {
                let parsed: u32 = raw.trim().parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid MAX_RETRIES '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "MAX_RETRIES must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        let user_agent = lookup("USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let raw_base = lookup("PODIUM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            AppError::ConfigError(format!("Invalid PODIUM_BASE_URL '{raw_base}': {e}"))
        })?;

        let principal_challenge = lookup("PODIUM_PRINCIPAL_CHALLENGE")
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRINCIPAL_CHALLENGE.to_string());

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            user_agent,
            base_url,
            principal_challenge,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            principal_challenge: DEFAULT_PRINCIPAL_CHALLENGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ScraperConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.base_url.as_str(), "https://www.nuitdelinfo.com/");
        assert_eq!(config.principal_challenge, "174");
    }

    #[test]
    fn reads_overrides() {
        let config = ScraperConfig::from_lookup(lookup(&[
            ("REQUEST_TIMEOUT", "3"),
            ("MAX_RETRIES", "5"),
            ("USER_AGENT", "test-agent"),
            ("PODIUM_BASE_URL", "http://localhost:9000"),
            ("PODIUM_PRINCIPAL_CHALLENGE", "494"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.retry_policy().max_retries, 5);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.principal_challenge, "494");
    }

    #[test]
    fn rejects_zero_retries() {
        let err = ScraperConfig::from_lookup(lookup(&[("MAX_RETRIES", "0")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let err = ScraperConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT", "ten")])).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err =
            ScraperConfig::from_lookup(lookup(&[("PODIUM_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
