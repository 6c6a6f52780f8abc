use serde::{Deserialize, Serialize};

use crate::modules::provider::domain::entities::AggregateResult;
use crate::shared::errors::{AppError, AppResult};

pub const NO_EPISODES_MESSAGE: &str = "No episodes found";

/// One episode-listing request for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRequest {
    pub title_id: String,
    /// Shortens the cache lifetime to the releasing TTL
    #[serde(default)]
    pub releasing: bool,
    /// Forces a refresh cycle regardless of cache state
    #[serde(default)]
    pub refresh: bool,
}

impl EpisodeRequest {
    pub fn new(title_id: &str) -> Self {
        Self {
            title_id: title_id.trim().to_string(),
            releasing: false,
            refresh: false,
        }
    }

    pub fn releasing(mut self, releasing: bool) -> Self {
        self.releasing = releasing;
        self
    }

    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Build a request from a title id and query pairs
    ///
    /// A flag is set only by the exact value `true`; anything else, including
    /// `1` or `TRUE`, leaves it off. Unknown parameters are ignored.
    pub fn from_query<I, K, V>(title_id: &str, query: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::new(title_id);
        request.validate()?;

        for (key, value) in query {
            let enabled = value.as_ref() == "true";
            match key.as_ref() {
                "releasing" => request.releasing = enabled,
                "refresh" => request.refresh = enabled,
                _ => {}
            }
        }
        Ok(request)
    }

    /// Same as [`Self::from_query`] for a raw `a=b&c=d` query string
    pub fn from_query_string(title_id: &str, query: &str) -> AppResult<Self> {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> AppResult<(String, String)> {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Ok((decode_component(key)?, decode_component(value)?))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Self::from_query(title_id, pairs)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.title_id.is_empty() {
            return Err(AppError::ValidationError("title id is required".to_string()));
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> AppResult<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AppError::ValidationError(format!("invalid query encoding: {}", e)))
}

/// Body returned to the caller: the listings, or a message when there are none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodeResponse {
    Episodes(AggregateResult),
    Message { message: String },
}

impl EpisodeResponse {
    pub fn from_result(result: AggregateResult) -> Self {
        if result.is_empty() {
            Self::Message {
                message: NO_EPISODES_MESSAGE.to_string(),
            }
        } else {
            Self::Episodes(result)
        }
    }

    pub fn episodes(&self) -> Option<&AggregateResult> {
        match self {
            Self::Episodes(result) => Some(result),
            Self::Message { .. } => None,
        }
    }
}
