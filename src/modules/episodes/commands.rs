use super::application::{EpisodeRequest, EpisodeResponse, EpisodeService};
use crate::log_error;
use std::sync::Arc;

/// `GET /episode/<title_id>?releasing=<bool>&refresh=<bool>`
///
/// `query` is the raw query string, with or without the leading `?`.
pub async fn get_episodes(
    title_id: String,
    query: Option<String>,
    episode_service: Arc<EpisodeService>,
) -> Result<EpisodeResponse, String> {
    let request = EpisodeRequest::from_query_string(&title_id, query.as_deref().unwrap_or(""))
        .map_err(|e| {
            log_error!("Rejected episode request for '{}': {}", title_id, e);
            e.to_string()
        })?;

    episode_service
        .get_episodes(&request)
        .await
        .map_err(|e| e.to_string())
}
