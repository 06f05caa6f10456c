/// Errors that can occur while fetching a game and updating the library.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid app id '{0}': expected digits only")]
    InvalidAppId(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Steam API request unsuccessful for app {app_id}. Response: {response}")]
    ApiFailure { app_id: String, response: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
