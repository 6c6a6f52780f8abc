/// Service builders wired to fakes or to a stub upstream
use super::fakes::{FixedMetadata, FixedResolver, RecordingProvider};
use super::stub_server::StubServer;
use miru_episodes::modules::episodes::{
    application::{AggregationPipeline, CacheCoordinator},
    domain::CacheStore,
};
use miru_episodes::modules::provider::domain::value_objects::ProviderId;
use miru_episodes::AppConfig;
use std::sync::Arc;
use std::time::Duration;

pub struct FakeUpstreams {
    pub resolver: Arc<FixedResolver>,
    pub metadata: Arc<FixedMetadata>,
    pub gogoanime: Arc<RecordingProvider>,
    pub zoro: Arc<RecordingProvider>,
    pub consumet: Arc<RecordingProvider>,
    pub anify: Arc<RecordingProvider>,
}

impl FakeUpstreams {
    pub fn pipeline(&self) -> Arc<AggregationPipeline> {
        Arc::new(
            AggregationPipeline::new(self.resolver.clone(), self.metadata.clone())
                .with_mapped_provider(ProviderId::gogoanime(), self.gogoanime.clone())
                .with_mapped_provider(ProviderId::zoro(), self.zoro.clone())
                .with_direct_provider(self.consumet.clone())
                .with_direct_provider(self.anify.clone()),
        )
    }

    pub fn coordinator(&self, cache: Option<Arc<dyn CacheStore>>) -> CacheCoordinator {
        CacheCoordinator::new(self.pipeline(), cache)
    }

    pub fn episode_fetches(&self) -> usize {
        self.gogoanime.call_count()
            + self.zoro.call_count()
            + self.consumet.call_count()
            + self.anify.call_count()
    }
}

/// Configuration pointing every upstream at the stub server
pub fn stub_config(server: &StubServer) -> AppConfig {
    AppConfig::new(
        server.url(),
        &format!("{}/zoro", server.url()),
        &format!("{}/mal/anime/anilist:", server.url()),
    )
    .with_anify_uri(&format!("{}/anify", server.url()))
    .with_anizip_uri(&format!("{}/anizip", server.url()))
    .with_timeout(Duration::from_secs(2))
}
