use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::FetchConfig;
use crate::error::ScrapeError;
use crate::types::{AppData, AppDetailsResponse};

/// How much of a raw API response to echo back in error messages.
const RESPONSE_EXCERPT_LEN: usize = 300;

/// Content types that indicate an error page rather than a media file.
const TEXTUAL_CONTENT_TYPES: &[&str] = &["text/html", "application/xml", "text/plain"];

/// Outcome of a single asset download. Failures are values, not errors, so
/// the caller can skip the asset and continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// File written to the destination.
    Saved,
    /// URL rejected before any request was made (not http/https).
    InvalidUrl,
    /// Server returned an empty body; the file was removed.
    EmptyBody,
    /// Request, decode, or write failed.
    Failed(String),
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved)
    }
}

/// Blocking HTTP client for the Steam storefront API and its asset CDN.
pub struct SteamClient {
    http: reqwest::blocking::Client,
    api_url: String,
    api_timeout: std::time::Duration,
    download_delay: std::time::Duration,
}

impl SteamClient {
    pub fn new(config: &FetchConfig) -> Result<Self, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.download_timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_timeout: config.api_timeout,
            download_delay: config.download_delay,
        })
    }

    /// Fetch appdetails for one app id, requesting English-language content.
    ///
    /// Transport failures, undecodable JSON, and a missing or false `success`
    /// flag are all terminal; the latter carries a response excerpt for
    /// diagnosis.
    pub fn app_details(&self, app_id: &str) -> Result<AppData, ScrapeError> {
        let resp = self
            .http
            .get(&self.api_url)
            .query(&[("appids", app_id), ("l", "english")])
            .timeout(self.api_timeout)
            .send()?
            .error_for_status()?;

        let text = resp.text()?;
        let parsed: AppDetailsResponse = serde_json::from_str(&text)?;

        match parsed.get(app_id) {
            Some(entry) if entry.success => entry.data.clone().ok_or_else(|| {
                ScrapeError::ApiFailure {
                    app_id: app_id.to_string(),
                    response: excerpt(&text),
                }
            }),
            _ => Err(ScrapeError::ApiFailure {
                app_id: app_id.to_string(),
                response: excerpt(&text),
            }),
        }
    }

    /// Download one asset to `dest`. Never propagates an error: every
    /// network, HTTP, or filesystem failure becomes a `DownloadOutcome`.
    pub fn download_asset(&self, url: &str, dest: &Path) -> DownloadOutcome {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            log::warn!("Skipping download for invalid URL: {url}");
            return DownloadOutcome::InvalidUrl;
        }
        match self.try_download(url, dest) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Error downloading {url}: {e}");
                DownloadOutcome::Failed(e.to_string())
            }
        }
    }

    fn try_download(&self, url: &str, dest: &Path) -> Result<DownloadOutcome, ScrapeError> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut resp = self.http.get(url).send()?.error_for_status()?;

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        if TEXTUAL_CONTENT_TYPES.iter().any(|t| content_type.contains(t)) {
            log::warn!("Received text content ({content_type}) for {url}. Might be an error page.");
        }

        let mut file = fs::File::create(dest)?;
        let written = std::io::copy(&mut resp, &mut file)?;
        file.flush()?;
        drop(file);

        if written == 0 {
            log::warn!("Downloaded file {} is empty. Removing.", dest.display());
            let _ = fs::remove_file(dest);
            return Ok(DownloadOutcome::EmptyBody);
        }
        if written < 100 && !content_type.contains("image") && !content_type.contains("video") {
            log::warn!(
                "Downloaded file {} is very small ({written} bytes).",
                dest.display()
            );
        }

        std::thread::sleep(self.download_delay);
        Ok(DownloadOutcome::Saved)
    }
}

/// First part of a raw response body, for error messages.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= RESPONSE_EXCERPT_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(RESPONSE_EXCERPT_LEN).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
