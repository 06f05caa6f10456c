//! Maps the storefront's nested payload into the flat library record.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::html::clean_html;
use crate::media::DownloadedAssets;
use crate::store::{GameRecord, Trailer};
use crate::types::AppData;

/// Marker Steam appends to languages with extra audio support.
const LANGUAGE_MARKER: &str = "<strong>*</strong>";

/// Clean the HTML in a requirements block. Steam sends either an object with
/// `minimum`/`recommended` HTML strings or an empty array; anything that is
/// not an object yields an empty map.
pub fn parse_requirements(raw: &Value) -> BTreeMap<String, String> {
    let mut reqs = BTreeMap::new();
    if let Value::Object(map) = raw {
        for (key, value) in map {
            if let Value::String(html) = value {
                reqs.insert(key.clone(), clean_html(html));
            }
        }
    }
    reqs
}

/// Parse the `supported_languages` HTML blob into a sorted, deduplicated
/// list. The disclaimer after the first `<br>` is dropped, as is the
/// extra-features marker on individual entries.
pub fn parse_languages(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let head = raw.split("<br>").next().unwrap_or("");
    let mut langs: Vec<String> = head
        .split(',')
        .map(|lang| lang.trim().replace(LANGUAGE_MARKER, "").trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Build the flat record for one game from the API payload and the results
/// of the asset download pass.
pub fn build_record(app_id: &str, data: &AppData, assets: &DownloadedAssets) -> GameRecord {
    let detailed = clean_html(data.detailed_description.as_deref().unwrap_or(""));
    let description = if detailed.is_empty() {
        clean_html(data.short_description.as_deref().unwrap_or(""))
    } else {
        detailed
    };

    let release_date = match &data.release_date {
        Some(info) if info.coming_soon => "Coming Soon".to_string(),
        Some(info) => info.date.clone().unwrap_or_else(|| "N/A".to_string()),
        None => "N/A".to_string(),
    };

    let mut os_list = Vec::new();
    if data.platforms.windows {
        os_list.push("Windows");
    }
    if data.platforms.mac {
        os_list.push("macOS");
    }
    if data.platforms.linux {
        os_list.push("Linux");
    }
    let supported_os = if os_list.is_empty() {
        "N/A".to_string()
    } else {
        os_list.join(", ")
    };

    let (metacritic_score, metacritic_url) = match &data.metacritic {
        Some(m) => (m.score, Some(m.url.clone())),
        None => (None, None),
    };

    let header = assets.path_for(data.header_image.as_deref());
    let capsule = assets.path_for(data.capsule_image.as_deref());

    let trailers = data
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let mut sources = BTreeMap::new();
            let candidates = [
                ("webm_480p", &movie.webm.p480),
                ("webm_max", &movie.webm.max),
                ("mp4_480p", &movie.mp4.p480),
                ("mp4_max", &movie.mp4.max),
            ];
            for (label, url) in candidates {
                if let Some(u) = url
                    && !u.is_empty()
                {
                    sources.insert(label.to_string(), u.clone());
                }
            }
            Trailer {
                id: movie.id,
                name: movie.name.clone(),
                thumbnail_path: assets.trailer_thumbnails.get(&i).cloned(),
                sources,
                highlight: movie.highlight,
            }
        })
        .collect();

    GameRecord {
        id: app_id.to_string(),
        name: data.name.clone().unwrap_or_else(|| "N/A".to_string()),
        is_free: data.is_free,
        app_type: data.app_type.clone().unwrap_or_else(|| "unknown".to_string()),
        description,
        developer: join_or_na(&data.developers),
        publisher: join_or_na(&data.publishers),
        release_date,
        supported_os,
        genres: descriptions(&data.genres),
        categories: descriptions(&data.categories),
        supported_languages: parse_languages(data.supported_languages.as_deref().unwrap_or("")),
        metacritic_score,
        metacritic_url,
        pc_requirements: parse_requirements(&data.pc_requirements),
        mac_requirements: parse_requirements(&data.mac_requirements),
        linux_requirements: parse_requirements(&data.linux_requirements),
        status: "Installed".to_string(),
        download_percent: 0,
        download_size: "N/A".to_string(),
        last_played: "Never".to_string(),
        play_time: "0 minutes".to_string(),
        // No direct source exists for icon/banner/logo; the capsule doubles
        // as the icon and the header as the banner.
        icon: capsule.clone(),
        banner: header.clone(),
        logo: None,
        header,
        capsule,
        screenshots: assets.screenshots.clone(),
        trailers,
    }
}

fn join_or_na(items: &[String]) -> String {
    let joined = items.join(", ");
    if joined.is_empty() {
        "N/A".to_string()
    } else {
        joined
    }
}

fn descriptions(items: &[crate::types::Descriptor]) -> Vec<String> {
    items
        .iter()
        .filter_map(|d| d.description.clone())
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
