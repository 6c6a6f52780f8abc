use super::ProviderId;
use serde::{Deserialize, Serialize};

/// Provider-internal ids a title resolves to for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMapping {
    pub provider_id: ProviderId,
    pub sub: Option<String>,
    pub dub: Option<String>,
}

impl ProviderMapping {
    /// Blank ids are treated as absent
    pub fn new(provider_id: ProviderId, sub: Option<String>, dub: Option<String>) -> Self {
        Self {
            provider_id,
            sub: non_blank(sub),
            dub: non_blank(dub),
        }
    }

    pub fn has_ids(&self) -> bool {
        self.sub.is_some() || self.dub.is_some()
    }
}

fn non_blank(id: Option<String>) -> Option<String> {
    id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}

/// What a provider client is asked to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    /// Direct mode: the canonical title id
    Title(String),
    /// Mapped mode: provider-specific ids from the mapping resolver
    Mapped(ProviderMapping),
}

impl FetchTarget {
    pub fn describe(&self) -> String {
        match self {
            FetchTarget::Title(id) => format!("title {}", id),
            FetchTarget::Mapped(mapping) => format!(
                "{} (sub: {}, dub: {})",
                mapping.provider_id,
                mapping.sub.as_deref().unwrap_or("-"),
                mapping.dub.as_deref().unwrap_or("-")
            ),
        }
    }
}
