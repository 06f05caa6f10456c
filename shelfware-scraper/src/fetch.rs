//! The pipeline driver: dedupe check, API fetch, asset downloads,
//! normalization, and the final merge into the library file.

use crate::client::SteamClient;
use crate::config::FetchConfig;
use crate::error::ScrapeError;
use crate::media;
use crate::normalize::build_record;
use crate::store::{GameRecord, Library};

/// Result of an add run.
#[derive(Debug)]
pub enum AddOutcome {
    /// Metadata fetched, assets downloaded, record appended.
    Added(GameRecord),
    /// A record with this id already exists; nothing was fetched or written.
    AlreadyPresent { id: String, name: String },
}

/// Fetch one game by app id and append it to the library.
///
/// Per-asset download failures are skipped; every other failure aborts the
/// run before anything is written. A duplicate id is benign: the run ends
/// successfully without touching the store.
pub fn add_game(config: &FetchConfig, app_id: &str) -> Result<AddOutcome, ScrapeError> {
    if app_id.is_empty() || !app_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScrapeError::InvalidAppId(app_id.to_string()));
    }

    let library = Library::load(&config.store_path);
    if let Some(existing) = library.get(app_id) {
        return Ok(AddOutcome::AlreadyPresent {
            id: app_id.to_string(),
            name: existing.name.clone(),
        });
    }

    let client = SteamClient::new(config)?;
    let data = client.app_details(app_id)?;
    log::info!(
        "Fetched metadata for {}",
        data.name.as_deref().unwrap_or("unknown")
    );

    let assets = media::download_all(&client, config, app_id, &data);
    let record = build_record(app_id, &data, &assets);

    // Reload before appending, to tolerate external changes made to the
    // store while assets were downloading.
    let mut library = Library::load(&config.store_path);
    library.push(record.clone());
    library.save(&config.store_path)?;

    Ok(AddOutcome::Added(record))
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
