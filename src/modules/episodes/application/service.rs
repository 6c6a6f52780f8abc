use std::sync::Arc;

use super::cache_coordinator::CacheCoordinator;
use super::dto::{EpisodeRequest, EpisodeResponse};
use crate::shared::errors::AppResult;
use crate::log_debug;

/// Entry point for episode-listing requests
pub struct EpisodeService {
    coordinator: Arc<CacheCoordinator>,
}

impl EpisodeService {
    pub fn new(coordinator: Arc<CacheCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Only an invalid request fails; upstream and cache trouble degrade the body
    pub async fn get_episodes(&self, request: &EpisodeRequest) -> AppResult<EpisodeResponse> {
        request.validate()?;

        let result = self.coordinator.get_episodes(request).await;
        log_debug!(
            "Returning {} provider listings for '{}'",
            result.len(),
            request.title_id
        );
        Ok(EpisodeResponse::from_result(result))
    }

    pub fn coordinator(&self) -> &Arc<CacheCoordinator> {
        &self.coordinator
    }
}
