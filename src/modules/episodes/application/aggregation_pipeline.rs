use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::provider::domain::{
    entities::{AggregateResult, EpisodeMetadataEntry},
    repositories::{EpisodeMetadataRepository, EpisodeProviderRepository, ProviderMappingRepository},
    value_objects::{FetchTarget, ProviderId, ProviderMapping},
};

/// Outcome of the metadata leg of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataFetch {
    /// Caller still holds usable metadata
    Skipped,
    Fetched(Vec<EpisodeMetadataEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Provider listings concatenated in provider order, not yet merged
    pub providers: AggregateResult,
    pub metadata: MetadataFetch,
    pub mode: FetchMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Providers queried by ids from the cross-reference service
    Mapped,
    /// Default provider set queried by the title id
    Direct,
}

/// Picks the provider set for a title and fans out to it
pub struct AggregationPipeline {
    mapping_resolver: Arc<dyn ProviderMappingRepository>,
    /// Queried in order when a mapping for their provider id exists
    mapped_providers: Vec<(ProviderId, Arc<dyn EpisodeProviderRepository>)>,
    direct_providers: Vec<Arc<dyn EpisodeProviderRepository>>,
    metadata: Arc<dyn EpisodeMetadataRepository>,
}

impl AggregationPipeline {
    pub fn new(
        mapping_resolver: Arc<dyn ProviderMappingRepository>,
        metadata: Arc<dyn EpisodeMetadataRepository>,
    ) -> Self {
        Self {
            mapping_resolver,
            mapped_providers: Vec::new(),
            direct_providers: Vec::new(),
            metadata,
        }
    }

    pub fn with_mapped_provider(
        mut self,
        provider_id: ProviderId,
        client: Arc<dyn EpisodeProviderRepository>,
    ) -> Self {
        self.mapped_providers.push((provider_id, client));
        self
    }

    pub fn with_direct_provider(mut self, client: Arc<dyn EpisodeProviderRepository>) -> Self {
        self.direct_providers.push(client);
        self
    }

    /// Resolve mappings, then fetch providers and metadata concurrently
    ///
    /// Never fails: every leg degrades to empty on its own.
    pub async fn run(&self, title_id: &str, fetch_metadata: bool) -> PipelineOutput {
        let mappings = self.resolve_mappings(title_id).await;
        let mode = if mappings.is_some() {
            FetchMode::Mapped
        } else {
            FetchMode::Direct
        };

        let providers = async {
            match &mappings {
                Some(mappings) => self.fetch_mapped(mappings).await,
                None => self.fetch_direct(title_id).await,
            }
        };
        let metadata = async {
            if fetch_metadata {
                MetadataFetch::Fetched(self.metadata.fetch_metadata(title_id).await)
            } else {
                MetadataFetch::Skipped
            }
        };

        let (providers, metadata) = tokio::join!(providers, metadata);

        info!(
            title_id,
            mode = ?mode,
            providers = providers.len(),
            "Aggregated episode listings"
        );
        PipelineOutput {
            providers,
            metadata,
            mode,
        }
    }

    async fn resolve_mappings(&self, title_id: &str) -> Option<Vec<ProviderMapping>> {
        if title_id.trim().is_empty() {
            return None;
        }
        self.mapping_resolver
            .resolve(title_id)
            .await
            .filter(|mappings| !mappings.is_empty())
    }

    async fn fetch_mapped(&self, mappings: &[ProviderMapping]) -> AggregateResult {
        let fetches = self.mapped_providers.iter().filter_map(|(provider_id, client)| {
            let mapping = mappings.iter().find(|m| &m.provider_id == provider_id)?;
            let target = FetchTarget::Mapped(mapping.clone());
            Some(async move { client.fetch_episodes(&target).await })
        });

        let results = join_all(fetches).await;
        debug!(requests = results.len(), "Mapped provider fetches finished");
        results.into_iter().flatten().collect()
    }

    async fn fetch_direct(&self, title_id: &str) -> AggregateResult {
        let target = FetchTarget::Title(title_id.to_string());
        let fetches = self
            .direct_providers
            .iter()
            .map(|client| client.fetch_episodes(&target));

        let results = join_all(fetches).await;
        debug!(requests = results.len(), "Direct provider fetches finished");
        results.into_iter().flatten().collect()
    }
}
