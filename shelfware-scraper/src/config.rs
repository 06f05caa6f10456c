use std::path::PathBuf;
use std::time::Duration;

use crate::sanitize::MEDIA_EXTENSIONS;

/// Configuration for one fetch run. Passed explicitly into the pipeline so
/// callers can redirect the store and assets tree without touching any
/// process-wide state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Steam appdetails endpoint.
    pub api_url: String,
    /// User agent sent with asset downloads.
    pub user_agent: String,
    /// Timeout for the metadata API call.
    pub api_timeout: Duration,
    /// Timeout for each asset download.
    pub download_timeout: Duration,
    /// Pause after every completed download, to avoid hammering the CDN.
    pub download_delay: Duration,
    /// Extensions accepted for downloaded media files.
    pub media_extensions: &'static [&'static str],
    /// Path to the library JSON file.
    pub store_path: PathBuf,
    /// Base directory for downloaded assets (one subdirectory per app id).
    pub assets_dir: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: "https://store.steampowered.com/api/appdetails".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
                .to_string(),
            api_timeout: Duration::from_secs(20),
            download_timeout: Duration::from_secs(45),
            download_delay: Duration::from_millis(50),
            media_extensions: MEDIA_EXTENSIONS,
            store_path: PathBuf::from("games.json"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}
