use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://spotify-downloader9.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "spotify-downloader9.p.rapidapi.com";

/// Response from the /downloadSong endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadSongResponse {
    #[serde(default)]
    pub data: Option<DownloadSongData>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadSongData {
    #[serde(rename = "downloadLink", default)]
    pub download_link: Option<String>,
}

impl DownloadSongResponse {
    /// The resolved link, if the service returned a non-empty one.
    pub fn download_link(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.download_link.as_deref())
            .filter(|link| !link.is_empty())
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
