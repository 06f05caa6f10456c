use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// One game's normalized metadata entry in the library. Field order matches
/// the on-disk schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub is_free: bool,
    #[serde(rename = "type")]
    pub app_type: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub release_date: String,
    pub supported_os: String,
    pub genres: Vec<String>,
    pub categories: Vec<String>,
    pub supported_languages: Vec<String>,
    /// Always present, null when the store page has no metacritic block.
    pub metacritic_score: Option<u32>,
    /// Omitted entirely when there is no metacritic block; null when the
    /// block is present but carries no URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic_url: Option<Option<String>>,
    pub pc_requirements: BTreeMap<String, String>,
    pub mac_requirements: BTreeMap<String, String>,
    pub linux_requirements: BTreeMap<String, String>,
    // User-state placeholders, fixed at creation and never recomputed.
    pub status: String,
    #[serde(rename = "downloadPercent")]
    pub download_percent: u32,
    #[serde(rename = "downloadSize")]
    pub download_size: String,
    #[serde(rename = "lastPlayed")]
    pub last_played: String,
    #[serde(rename = "playTime")]
    pub play_time: String,
    // Store-relative asset paths; null when the download failed or the API
    // offered no source.
    pub header: Option<String>,
    pub capsule: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub screenshots: Vec<String>,
    pub trailers: Vec<Trailer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trailer {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub thumbnail_path: Option<String>,
    /// Label -> direct video URL; entries with no URL are omitted.
    pub sources: BTreeMap<String, String>,
    pub highlight: bool,
}

/// The persisted library file: `{"library": [Record, ...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub library: Vec<GameRecord>,
}

impl Library {
    /// Load the library from disk. A missing file, empty content, or
    /// undecodable JSON all yield an empty library rather than an error.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Library file {} not found. Starting fresh.", path.display());
            return Self::default();
        }
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Error reading library file {}: {e}", path.display());
                return Self::default();
            }
        };
        if contents.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(&contents) {
            Ok(library) => library,
            Err(e) => {
                log::warn!(
                    "Could not decode JSON from {}: {e}. Starting fresh.",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Write the library as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> Result<(), ScrapeError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Linear scan for a record by app id. Uniqueness is the caller's
    /// responsibility; the store itself does not enforce it.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.library.iter().find(|g| g.id == id)
    }

    pub fn push(&mut self, record: GameRecord) {
        self.library.push(record);
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
