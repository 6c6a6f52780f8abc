//! Rate-limited JSON HTTP client shared by all upstream adapters
//!
//! Every request is a single attempt bounded by the configured timeout; a failed
//! call surfaces as an `AppError` for the adapter to degrade.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "miru-episodes/0.1";
const BODY_PREVIEW_LEN: usize = 200;

pub struct JsonClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    provider_name: String,
}

impl JsonClient {
    /// Create a client with the given per-call timeout and request rate
    pub fn new(provider_name: &str, timeout: Duration, requests_per_second: f64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second, 5)?,
            provider_name: provider_name.to_string(),
        })
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> AppResult<DirectRateLimiter> {
        if !(requests_per_second.is_finite() && requests_per_second > 0.0) {
            return Err(AppError::ConfigError(
                "requests per second must be a positive number".to_string(),
            ));
        }

        let period = Duration::try_from_secs_f64(1.0 / requests_per_second).map_err(|e| {
            AppError::ConfigError(format!(
                "Unusable request rate {}: {}",
                requests_per_second, e
            ))
        })?;
        let quota = Quota::with_period(period)
            .ok_or_else(|| AppError::ConfigError("rate limit period is zero".to_string()))?;
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);

        Ok(GovernorRateLimiter::direct(quota.allow_burst(burst)))
    }

    /// GET a URL and decode its JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        LogContext::api_call(&self.provider_name, url, "started", None);
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            url,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        Self::check_status(status, &self.provider_name)?;
        self.parse_response(response).await
    }

    fn check_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "{} returned 404",
                provider_name
            ))),
            s => Err(AppError::UpstreamUnavailable(format!(
                "{} returned {}",
                provider_name, s
            ))),
        }
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await?;

        decode_json(&self.provider_name, &response_text)
    }
}

/// Decode a JSON body, reporting a truncated preview on failure
pub fn decode_json<T>(provider_name: &str, body: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(BODY_PREVIEW_LEN).collect();
        let ellipsis = if body.chars().count() > BODY_PREVIEW_LEN { "..." } else { "" };
        AppError::MalformedPayload(format!(
            "Failed to parse {} response: {}. Response: {}{}",
            provider_name, e, preview, ellipsis
        ))
    })
}
