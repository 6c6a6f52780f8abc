use std::fmt;

/// Key of one of the two per-title cache namespaces
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    const EPISODES_PREFIX: &'static str = "episode:";
    const METADATA_PREFIX: &'static str = "meta:";

    /// `episode:<id>`, holding the provider listings
    pub fn episodes(title_id: &str) -> Self {
        Self(format!("{}{}", Self::EPISODES_PREFIX, title_id))
    }

    /// `meta:<id>`, holding the raw metadata list
    pub fn metadata(title_id: &str) -> Self {
        Self(format!("{}{}", Self::METADATA_PREFIX, title_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
