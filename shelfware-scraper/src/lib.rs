//! Fetches a game's metadata from the Steam storefront API, downloads its
//! media assets, and appends a normalized record to the local library file.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod html;
pub mod media;
pub mod normalize;
pub mod sanitize;
pub mod store;
pub mod types;

pub use client::{DownloadOutcome, SteamClient};
pub use config::FetchConfig;
pub use error::ScrapeError;
pub use fetch::{AddOutcome, add_game};
pub use media::{AssetKind, DownloadedAssets};
pub use store::{GameRecord, Library, Trailer};
