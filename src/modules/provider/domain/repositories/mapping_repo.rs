use async_trait::async_trait;

use crate::modules::provider::domain::value_objects::ProviderMapping;

/// Resolves a title id to provider-specific ids
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderMappingRepository: Send + Sync {
    /// `None` when the cross-reference service failed or knows nothing useful
    async fn resolve(&self, title_id: &str) -> Option<Vec<ProviderMapping>>;
}
