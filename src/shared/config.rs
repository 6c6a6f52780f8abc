use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

const DEFAULT_ANIFY_URI: &str = "https://anify.eltik.cc";
const DEFAULT_ANIZIP_URI: &str = "https://api.ani.zip";
const DEFAULT_TIMEOUT_MS: u64 = 9000;
const DEFAULT_REQUESTS_PER_SECOND: f64 = 10.0;
const DEFAULT_PROVIDER_ALIASES: &str = "gogoanime=gogobackup";
const DEFAULT_EXCLUDED_PROVIDERS: &str = "9anime";

/// Runtime configuration for upstream endpoints and the cache backend
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub consumet_uri: String,
    pub zoro_uri: String,
    /// Prefix the title id is appended to verbatim
    pub malsync_uri: String,
    pub anify_uri: String,
    pub anizip_uri: String,
    pub redis_url: Option<String>,
    pub upstream_timeout: Duration,
    pub requests_per_second: f64,
    /// Secondary aggregator provider renames, applied before results leave the client
    pub provider_aliases: Vec<(String, String)>,
    pub excluded_providers: Vec<String>,
}

impl AppConfig {
    pub fn new(consumet_uri: &str, zoro_uri: &str, malsync_uri: &str) -> Self {
        Self {
            consumet_uri: trim_base(consumet_uri),
            zoro_uri: trim_base(zoro_uri),
            malsync_uri: malsync_uri.to_string(),
            anify_uri: DEFAULT_ANIFY_URI.to_string(),
            anizip_uri: DEFAULT_ANIZIP_URI.to_string(),
            redis_url: None,
            upstream_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            provider_aliases: parse_aliases(DEFAULT_PROVIDER_ALIASES),
            excluded_providers: parse_list(DEFAULT_EXCLUDED_PROVIDERS),
        }
    }

    pub fn with_redis_url(mut self, redis_url: &str) -> Self {
        self.redis_url = Some(redis_url.to_string());
        self
    }

    pub fn with_anify_uri(mut self, uri: &str) -> Self {
        self.anify_uri = trim_base(uri);
        self
    }

    pub fn with_anizip_uri(mut self, uri: &str) -> Self {
        self.anizip_uri = trim_base(uri);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> AppResult<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };

        let mut config = Self::new(
            &required("CONSUMET_URI")?,
            &required("ZORO_URI")?,
            &required("MALSYNC_URI")?,
        );

        if let Some(uri) = lookup("ANIFY_URI") {
            config.anify_uri = trim_base(&uri);
        }
        if let Some(uri) = lookup("ANIZIP_URI") {
            config.anizip_uri = trim_base(&uri);
        }
        config.redis_url = lookup("REDIS_URL").filter(|url| !url.trim().is_empty());

        if let Some(timeout) = lookup("UPSTREAM_TIMEOUT_MS") {
            config.upstream_timeout = Duration::from_millis(timeout.trim().parse::<u64>()?);
        }
        if let Some(rate) = lookup("UPSTREAM_REQUESTS_PER_SECOND") {
            let rate = rate.trim().parse::<f64>()?;
            if !(rate.is_finite() && rate > 0.0) {
                return Err(AppError::ConfigError(
                    "UPSTREAM_REQUESTS_PER_SECOND must be a positive number".to_string(),
                ));
            }
            config.requests_per_second = rate;
        }
        if let Some(aliases) = lookup("PROVIDER_ALIASES") {
            config.provider_aliases = parse_aliases(&aliases);
        }
        if let Some(excluded) = lookup("EXCLUDED_PROVIDERS") {
            config.excluded_providers = parse_list(&excluded);
        }

        Ok(config)
    }
}

fn trim_base(uri: &str) -> String {
    uri.trim().trim_end_matches('/').to_string()
}

/// Parse `from=to` pairs separated by commas
fn parse_aliases(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (from, to) = pair.split_once('=')?;
            let (from, to) = (from.trim(), to.trim());
            (!from.is_empty() && !to.is_empty()).then(|| (from.to_lowercase(), to.to_lowercase()))
        })
        .collect()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CONSUMET_URI", "https://consumet.example/"),
            ("ZORO_URI", "https://zoro.example"),
            ("MALSYNC_URI", "https://malsync.example/anilist:"),
        ]))
        .unwrap();

        assert_eq!(config.consumet_uri, "https://consumet.example");
        assert_eq!(config.malsync_uri, "https://malsync.example/anilist:");
        assert_eq!(config.anify_uri, DEFAULT_ANIFY_URI);
        assert_eq!(config.redis_url, None);
        assert_eq!(config.upstream_timeout, Duration::from_millis(9000));
        assert_eq!(
            config.provider_aliases,
            vec![("gogoanime".to_string(), "gogobackup".to_string())]
        );
        assert_eq!(config.excluded_providers, vec!["9anime".to_string()]);
    }

    #[test]
    fn missing_required_value_is_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("CONSUMET_URI", "x")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn parses_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CONSUMET_URI", "a"),
            ("ZORO_URI", "b"),
            ("MALSYNC_URI", "c"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("UPSTREAM_TIMEOUT_MS", "1500"),
            ("PROVIDER_ALIASES", "gogoanime=gogobackup, zoro = zorobackup,broken"),
            ("EXCLUDED_PROVIDERS", "9anime, Animepahe"),
        ]))
        .unwrap();

        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(config.upstream_timeout, Duration::from_millis(1500));
        assert_eq!(config.provider_aliases.len(), 2);
        assert_eq!(config.excluded_providers, vec!["9anime", "animepahe"]);
    }

    #[test]
    fn rejects_bad_numbers() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("CONSUMET_URI", "a"),
            ("ZORO_URI", "b"),
            ("MALSYNC_URI", "c"),
            ("UPSTREAM_TIMEOUT_MS", "soon"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn rejects_unusable_request_rates() {
        for rate in ["NaN", "inf", "-2", "0"] {
            let result = AppConfig::from_lookup(lookup_from(&[
                ("CONSUMET_URI", "a"),
                ("ZORO_URI", "b"),
                ("MALSYNC_URI", "c"),
                ("UPSTREAM_REQUESTS_PER_SECOND", rate),
            ]));
            assert!(
                matches!(result, Err(AppError::ConfigError(_))),
                "rate {} should be rejected",
                rate
            );
        }
    }
}
