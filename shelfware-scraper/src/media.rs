use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::client::SteamClient;
use crate::config::FetchConfig;
use crate::sanitize::{
    ensure_extension, filename_from_url, has_allowed_extension, sanitize_filename,
};
use crate::types::AppData;

/// Role of an asset URL. Picks the destination directory, the fallback
/// filename, and the ordering key for screenshots and trailer thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Header,
    Capsule,
    Screenshot(usize),
    TrailerThumbnail(usize),
}

impl AssetKind {
    /// Label used when no filename can be derived from the URL itself.
    pub fn label(&self) -> String {
        match self {
            AssetKind::Header => "header".to_string(),
            AssetKind::Capsule => "capsule".to_string(),
            AssetKind::Screenshot(i) => format!("screenshot_{i}"),
            AssetKind::TrailerThumbnail(i) => format!("trailer_{i}_thumbnail"),
        }
    }

    /// Subdirectory under the game's asset dir, or `None` for the asset root.
    fn subdir(&self) -> Option<&'static str> {
        match self {
            AssetKind::Header | AssetKind::Capsule => None,
            AssetKind::Screenshot(_) => Some("screenshots"),
            AssetKind::TrailerThumbnail(_) => Some("trailers"),
        }
    }
}

/// Results of the download pass, consumed by the normalizer.
#[derive(Debug, Default, Clone)]
pub struct DownloadedAssets {
    /// Remote URL -> store-relative path (always forward slashes).
    pub by_url: HashMap<String, String>,
    /// Screenshot paths in original API order; failed downloads are absent.
    pub screenshots: Vec<String>,
    /// Trailer index -> thumbnail path.
    pub trailer_thumbnails: HashMap<usize, String>,
}

impl DownloadedAssets {
    /// Look up the local path an asset URL was saved to.
    pub fn path_for(&self, url: Option<&str>) -> Option<String> {
        url.and_then(|u| self.by_url.get(u)).cloned()
    }
}

/// Enumerate every asset URL for a game, deduplicated by URL value. The
/// first kind wins when the same URL appears in more than one role.
pub fn enumerate_assets(data: &AppData) -> Vec<(String, AssetKind)> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    let mut push = |url: Option<&String>, kind: AssetKind| {
        if let Some(u) = url
            && !u.is_empty()
            && seen.insert(u.clone())
        {
            urls.push((u.clone(), kind));
        }
    };

    push(data.header_image.as_ref(), AssetKind::Header);
    push(data.capsule_image.as_ref(), AssetKind::Capsule);
    for (i, shot) in data.screenshots.iter().enumerate() {
        push(shot.path_full.as_ref(), AssetKind::Screenshot(i));
    }
    for (i, movie) in data.movies.iter().enumerate() {
        push(movie.thumbnail.as_ref(), AssetKind::TrailerThumbnail(i));
    }

    urls
}

/// Download every asset for a game, sequentially. Individual failures are
/// logged and skipped; they never abort the run.
pub fn download_all(
    client: &SteamClient,
    config: &FetchConfig,
    app_id: &str,
    data: &AppData,
) -> DownloadedAssets {
    let mut assets = DownloadedAssets::default();
    let game_dir = config.assets_dir.join(app_id);

    for (url, kind) in enumerate_assets(data) {
        let filename = filename_from_url(&url).unwrap_or_else(|| kind.label());
        let filename = ensure_extension(&sanitize_filename(&filename), &url, config.media_extensions);

        if !has_allowed_extension(&filename, config.media_extensions) {
            log::warn!("Skipping download (no valid media extension): {filename} ({url})");
            continue;
        }

        let dest = match kind.subdir() {
            Some(sub) => game_dir.join(sub).join(&filename),
            None => game_dir.join(&filename),
        };

        if client.download_asset(&url, &dest).is_saved() {
            let rel = forward_slash(&dest);
            assets.by_url.insert(url, rel.clone());
            match kind {
                AssetKind::Screenshot(_) => assets.screenshots.push(rel),
                AssetKind::TrailerThumbnail(i) => {
                    assets.trailer_thumbnails.insert(i, rel);
                }
                _ => {}
            }
        }
    }

    assets
}

/// Render a path with forward slashes regardless of host convention, for
/// storage in the library file.
fn forward_slash(path: &Path) -> String {
    path.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
