use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level appdetails response: one entry keyed by the requested app id.
pub type AppDetailsResponse = HashMap<String, AppDetailsEntry>;

#[derive(Debug, Deserialize)]
pub struct AppDetailsEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppData>,
}

/// Game data from the Steam storefront. Only the fields the normalizer
/// consumes are modeled; everything else is ignored.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub app_type: Option<String>,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub release_date: Option<ReleaseDate>,
    #[serde(default)]
    pub platforms: Platforms,
    #[serde(default)]
    pub genres: Vec<Descriptor>,
    #[serde(default)]
    pub categories: Vec<Descriptor>,
    #[serde(default)]
    pub supported_languages: Option<String>,
    #[serde(default)]
    pub metacritic: Option<Metacritic>,
    /// Either an object with minimum/recommended HTML blocks or an empty
    /// array when the platform has no requirements listed.
    #[serde(default)]
    pub pc_requirements: Value,
    #[serde(default)]
    pub mac_requirements: Value,
    #[serde(default)]
    pub linux_requirements: Value,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(rename = "capsule_imagev5", default)]
    pub capsule_image: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ReleaseDate {
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Platforms {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}

/// Genre or category entry; only the display text is used.
#[derive(Debug, Deserialize, Clone)]
pub struct Descriptor {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Metacritic {
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Screenshot {
    #[serde(default)]
    pub path_full: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Movie {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub webm: VideoSources,
    #[serde(default)]
    pub mp4: VideoSources,
    #[serde(default)]
    pub highlight: bool,
}

/// Video source URLs at the two encode levels Steam serves.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct VideoSources {
    #[serde(rename = "480", default)]
    pub p480: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}
