use async_trait::async_trait;

use crate::modules::provider::domain::{entities::ProviderEpisodeSet, value_objects::FetchTarget};

/// Contract every upstream episode client fulfils
///
/// Implementations never fail outward: transport errors, malformed payloads and
/// upstream "not found" sentinels all degrade to an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeProviderRepository: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Fetch and normalize episode listings for the given target
    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet>;
}
