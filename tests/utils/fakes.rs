/// Recording in-memory stand-ins for the upstream and cache traits
use async_trait::async_trait;
use miru_episodes::modules::episodes::domain::CacheStore;
use miru_episodes::modules::provider::domain::{
    entities::{EpisodeMetadataEntry, ProviderEpisodeSet},
    repositories::{EpisodeMetadataRepository, EpisodeProviderRepository, ProviderMappingRepository},
    value_objects::{FetchTarget, ProviderMapping},
};
use miru_episodes::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider returning fixed listings and remembering every target it saw
pub struct RecordingProvider {
    name: &'static str,
    sets: Vec<ProviderEpisodeSet>,
    targets: Mutex<Vec<FetchTarget>>,
}

impl RecordingProvider {
    pub fn new(name: &'static str, sets: Vec<ProviderEpisodeSet>) -> Self {
        Self {
            name,
            sets,
            targets: Mutex::new(Vec::new()),
        }
    }

    pub fn targets(&self) -> Vec<FetchTarget> {
        self.targets.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.targets.lock().unwrap().len()
    }
}

#[async_trait]
impl EpisodeProviderRepository for RecordingProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
        self.targets.lock().unwrap().push(target.clone());
        self.sets.clone()
    }
}

pub struct FixedResolver {
    mappings: Option<Vec<ProviderMapping>>,
    calls: AtomicUsize,
}

impl FixedResolver {
    pub fn new(mappings: Option<Vec<ProviderMapping>>) -> Self {
        Self {
            mappings,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::new(None)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderMappingRepository for FixedResolver {
    async fn resolve(&self, _title_id: &str) -> Option<Vec<ProviderMapping>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.mappings.clone()
    }
}

pub struct FixedMetadata {
    entries: Vec<EpisodeMetadataEntry>,
    calls: AtomicUsize,
}

impl FixedMetadata {
    pub fn new(entries: Vec<EpisodeMetadataEntry>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EpisodeMetadataRepository for FixedMetadata {
    async fn fetch_metadata(&self, _title_id: &str) -> Vec<EpisodeMetadataEntry> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.clone()
    }
}

/// Cache backend that fails every call, counting the attempts
#[derive(Default)]
pub struct FailingCache {
    calls: AtomicUsize,
}

impl FailingCache {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::CacheUnavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        self.fail()
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl_secs: u64) -> AppResult<()> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> AppResult<()> {
        self.fail()
    }
}
