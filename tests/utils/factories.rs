/// Builders for episode listings and metadata used across the tests
use miru_episodes::modules::provider::domain::{
    entities::{AggregateResult, Episode, EpisodeMetadataEntry, EpisodeTracks, ProviderEpisodeSet},
    value_objects::{EpisodeNumber, ProviderId},
};
use serde_json::{json, Value};

pub fn episodes(prefix: &str, count: u32) -> Vec<Episode> {
    (1..=count)
        .map(|n| Episode::new(format!("{}-episode-{}", prefix, n), EpisodeNumber::from(n)))
        .collect()
}

pub fn sub_set(provider: &str, count: u32) -> ProviderEpisodeSet {
    ProviderEpisodeSet::sub_only(ProviderId::new(provider), episodes(provider, count))
}

pub fn sub_dub_set(provider: &str, sub: u32, dub: u32) -> ProviderEpisodeSet {
    ProviderEpisodeSet::new(
        ProviderId::new(provider),
        EpisodeTracks::new(
            episodes(provider, sub),
            episodes(&format!("{}-dub", provider), dub),
        ),
    )
}

pub fn metadata(count: u32) -> Vec<EpisodeMetadataEntry> {
    (1..=count)
        .map(|n| {
            let mut entry = EpisodeMetadataEntry::new(EpisodeNumber::from(n));
            entry.title = Some(format!("Meta Episode {}", n));
            entry.image = Some(format!("https://img.example/{}.jpg", n));
            entry.air_date = Some(format!("2024-01-{:02}", n.min(28)));
            entry
        })
        .collect()
}

pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

pub fn titles(result: &AggregateResult, provider_index: usize) -> Vec<Option<String>> {
    result[provider_index]
        .tracks
        .sub
        .as_ref()
        .map(|list| list.iter().map(|e| e.title.clone()).collect())
        .unwrap_or_default()
}

/// Upstream-shaped JSON bodies
pub mod payloads {
    use super::*;

    pub fn consumet_episodes(prefix: &str, count: u32) -> String {
        let episodes: Vec<Value> = (1..=count)
            .map(|n| {
                json!({
                    "id": format!("{}-episode-{}", prefix, n),
                    "number": n,
                    "title": format!("Episode {}", n),
                })
            })
            .collect();
        Value::Array(episodes).to_string()
    }

    pub fn gogoanime_info(id: &str, count: u32) -> String {
        let episodes: Vec<Value> = (1..=count)
            .map(|n| {
                json!({
                    "id": format!("{}-episode-{}", id, n),
                    "number": n,
                    "url": format!("https://gogo.example/{}-episode-{}", id, n),
                })
            })
            .collect();
        json!({ "id": id, "title": id, "episodes": episodes }).to_string()
    }

    pub fn zoro_episodes(id: &str, count: u32) -> String {
        let episodes: Vec<Value> = (1..=count)
            .map(|n| {
                json!({
                    "episodeId": format!("{}?ep={}", id, 1000 + n),
                    "number": n,
                    "title": format!("Zoro {}", n),
                    "isFiller": false,
                })
            })
            .collect();
        json!({ "totalEpisodes": count, "episodes": episodes }).to_string()
    }

    pub fn malsync(gogo_sub: &str, gogo_dub: Option<&str>, zoro: Option<&str>) -> String {
        let mut gogo = serde_json::Map::new();
        gogo.insert(gogo_sub.to_string(), json!({ "identifier": gogo_sub, "title": "Show" }));
        if let Some(dub) = gogo_dub {
            gogo.insert(dub.to_string(), json!({ "identifier": dub, "title": "Show (Dub)" }));
        }

        let mut sites = serde_json::Map::new();
        sites.insert("Gogoanime".to_string(), Value::Object(gogo));
        if let Some(zoro) = zoro {
            let mut entries = serde_json::Map::new();
            entries.insert(zoro.to_string(), json!({ "identifier": zoro }));
            sites.insert("Zoro".to_string(), Value::Object(entries));
        }
        sites.insert("Crunchyroll".to_string(), json!({ "x": { "identifier": "x" } }));

        json!({ "id": 1, "Sites": sites }).to_string()
    }

    pub fn anify_info() -> String {
        json!({
            "id": "21",
            "episodes": {
                "latest": {},
                "data": [
                    { "providerId": "gogoanime", "episodes": [
                        { "id": "/gogo-1", "number": 1, "title": "Backup 1" },
                        { "id": "/gogo-2", "number": 2 }
                    ]},
                    { "providerId": "9anime", "episodes": [
                        { "id": "/nine-1", "number": 1 }
                    ]},
                    { "providerId": "zoro", "episodes": {
                        "sub": [{ "id": "/zoro-1", "number": 1 }],
                        "dub": []
                    }}
                ]
            }
        })
        .to_string()
    }

    pub fn anizip(count: u32) -> String {
        let mut episodes = serde_json::Map::new();
        for n in 1..=count {
            episodes.insert(
                n.to_string(),
                json!({
                    "episode": n.to_string(),
                    "title": { "en": format!("Meta Episode {}", n), "x-jat": "Romaji" },
                    "airdate": "2024-01-01",
                    "image": format!("https://img.example/{}.jpg", n),
                    "overview": format!("Overview {}", n),
                    "runtime": 24,
                }),
            );
        }
        episodes.insert("S1".to_string(), json!({ "episode": "S1", "title": { "en": "Special" } }));
        json!({ "titles": {}, "episodes": episodes }).to_string()
    }
}
