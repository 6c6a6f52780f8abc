use crate::modules::provider::domain::{entities::ProviderEpisodeSet, value_objects::FetchTarget};
use crate::shared::errors::AppResult;

/// Swallow a provider failure, logging it, and fall back to the empty value
pub fn degrade<T: Default>(provider_name: &str, target: &FetchTarget, result: AppResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) if e.is_upstream() => {
            log::warn!(
                "{}: fetch for {} failed, treating as empty: {}",
                provider_name,
                target.describe(),
                e
            );
            T::default()
        }
        Err(e) => {
            log::error!(
                "{}: unexpected error for {}, treating as empty: {}",
                provider_name,
                target.describe(),
                e
            );
            T::default()
        }
    }
}

/// A client asked for a target mode it does not serve
pub fn unsupported_target(provider_name: &str, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
    log::debug!(
        "{}: {} is not a supported fetch target, skipping",
        provider_name,
        target.describe()
    );
    Vec::new()
}

/// Drop listings that ended up without any track
pub fn non_empty_sets(sets: Vec<ProviderEpisodeSet>) -> Vec<ProviderEpisodeSet> {
    sets.into_iter().filter(ProviderEpisodeSet::has_episodes).collect()
}
