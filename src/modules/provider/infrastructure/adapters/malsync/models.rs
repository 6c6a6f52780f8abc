// MalSync cross-reference response shapes

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct MalSyncResponse {
    #[serde(rename = "Sites", default)]
    pub sites: BTreeMap<String, BTreeMap<String, MalSyncSiteEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MalSyncSiteEntry {
    /// String on most sites, numeric on some
    #[serde(default)]
    pub identifier: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl MalSyncSiteEntry {
    pub fn identifier_or(&self, key: &str) -> String {
        match &self.identifier {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => key.to_string(),
        }
    }

    pub fn is_dub(&self, identifier: &str) -> bool {
        identifier.to_lowercase().ends_with("-dub")
            || self
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains("(dub)"))
    }
}
