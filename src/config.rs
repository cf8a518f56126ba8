use std::env;

use log::{debug, warn};

use crate::api::{models, ApiConfig};

pub const API_KEY_VAR: &str = "SPOTIFY_DOWNLOADER_API_KEY";
pub const BASE_URL_VAR: &str = "SPOTIFY_DOWNLOADER_BASE_URL";
pub const API_HOST_VAR: &str = "SPOTIFY_DOWNLOADER_API_HOST";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load from the environment, after pulling in a `.env` file if there is one.
    ///
    /// A missing API key is not an error here: the download service rejects the
    /// request and the user sees the usual failure message.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).unwrap_or_else(|| {
            warn!("{} is not set; download requests will be rejected", API_KEY_VAR);
            String::new()
        });

        Self {
            api: ApiConfig {
                api_key,
                api_host: non_empty(API_HOST_VAR)
                    .unwrap_or_else(|| models::DEFAULT_API_HOST.to_string()),
                base_url: non_empty(BASE_URL_VAR)
                    .unwrap_or_else(|| models::DEFAULT_BASE_URL.to_string()),
            },
        }
    }
}
