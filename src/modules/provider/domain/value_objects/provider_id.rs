use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Presentation-layer provider identifier (e.g. `gogoanime`, `zoro`)
///
/// Always lower-case so ids reported by different upstreams compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    pub const GOGOANIME: &'static str = "gogoanime";
    pub const ZORO: &'static str = "zoro";

    pub fn new(id: &str) -> Self {
        Self(id.trim().to_lowercase())
    }

    pub fn gogoanime() -> Self {
        Self::new(Self::GOGOANIME)
    }

    pub fn zoro() -> Self {
        Self::new(Self::ZORO)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProviderId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<ProviderId> for String {
    fn from(value: ProviderId) -> Self {
        value.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rename and exclusion rules applied to provider ids reported by an upstream
///
/// A backup source can report the same underlying name as a canonical provider
/// (the secondary aggregator reports its own `gogoanime` mirror); the alias
/// keeps the two from colliding in the merged result.
#[derive(Debug, Clone, Default)]
pub struct ProviderAliasTable {
    aliases: HashMap<ProviderId, ProviderId>,
    excluded: HashSet<ProviderId>,
}

impl ProviderAliasTable {
    pub fn new<A, E>(aliases: A, excluded: E) -> Self
    where
        A: IntoIterator<Item = (String, String)>,
        E: IntoIterator<Item = String>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(from, to)| (ProviderId::new(&from), ProviderId::new(&to)))
                .collect(),
            excluded: excluded.into_iter().map(|id| ProviderId::new(&id)).collect(),
        }
    }

    /// Returns `None` for excluded providers, the aliased id otherwise
    pub fn resolve(&self, raw: &str) -> Option<ProviderId> {
        let id = ProviderId::new(raw);
        if self.excluded.contains(&id) {
            return None;
        }
        Some(self.aliases.get(&id).cloned().unwrap_or(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ProviderAliasTable {
        ProviderAliasTable::new(
            vec![("gogoanime".to_string(), "gogobackup".to_string())],
            vec!["9anime".to_string()],
        )
    }

    #[test]
    fn normalizes_case() {
        assert_eq!(ProviderId::new(" Zoro "), ProviderId::zoro());
    }

    #[test]
    fn aliases_backup_provider() {
        let resolved = table().resolve("Gogoanime").unwrap();
        assert_eq!(resolved.as_str(), "gogobackup");
        assert_ne!(resolved, ProviderId::gogoanime());
    }

    #[test]
    fn drops_excluded_provider() {
        assert!(table().resolve("9anime").is_none());
    }

    #[test]
    fn passes_unknown_provider_through() {
        assert_eq!(table().resolve("animepahe").unwrap().as_str(), "animepahe");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ProviderId::new("Zoro")).unwrap();
        assert_eq!(json, r#""zoro""#);
    }
}
