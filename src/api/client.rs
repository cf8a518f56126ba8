use log::{debug, info};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::models::{ApiConfig, DownloadSongResponse};
use crate::domain::{DownloadLink, TrackId};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";
const DOWNLOAD_SONG_PATH: &str = "/downloadSong";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Download link not found in response")]
    NoDownloadLink,
}

impl ApiError {
    /// True when the transport succeeded but the body was not what we expect.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, ApiError::InvalidResponse(_) | ApiError::NoDownloadLink)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn download_song_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            DOWNLOAD_SONG_PATH
        )
    }

    /// Ask the download service for a link to the track's audio file.
    ///
    /// One attempt, no retries. Non-2xx statuses and transport errors come back as
    /// `RequestError`/`Status`; a 2xx without `data.downloadLink` as `NoDownloadLink`.
    pub async fn request_download(&self, track_id: &TrackId) -> Result<DownloadLink> {
        let url = self.download_song_url();
        debug!("Requesting download link for {} from {}", track_id, url);

        let response = self
            .http
            .get(&url)
            .query(&[("songId", track_id.as_str())])
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_HOST_HEADER, &self.config.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: DownloadSongResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("JSON decode error: {}", e)))?;

        let link = body.download_link().ok_or(ApiError::NoDownloadLink)?;
        info!("Resolved download link for {}", track_id);

        Ok(DownloadLink::new(link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TRACK: &str = "3n3Ppam7vgaVa1iaRUc9Lp";

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(ApiConfig {
            api_key: "test-key".to_string(),
            api_host: "spotify-downloader9.p.rapidapi.com".to_string(),
            base_url: server.url(),
        })
    }

    #[tokio::test]
    async fn test_request_download_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/downloadSong")
            .match_query(Matcher::UrlEncoded("songId".into(), TRACK.into()))
            .match_header("x-rapidapi-key", "test-key")
            .match_header("x-rapidapi-host", "spotify-downloader9.p.rapidapi.com")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"downloadLink":"https://dl.example/x.mp3"}}"#)
            .expect(1)
            .create_async()
            .await;

        let link = client_for(&server)
            .request_download(&TrackId::new(TRACK))
            .await
            .unwrap();

        assert_eq!(link.as_str(), "https://dl.example/x.mp3");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_download_trailing_slash_in_base_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/downloadSong")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":{"downloadLink":"https://dl.example/y.mp3"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig {
            base_url: format!("{}/", server.url()),
            ..ApiConfig::default()
        });
        let link = client.request_download(&TrackId::new(TRACK)).await.unwrap();

        assert_eq!(link.as_str(), "https://dl.example/y.mp3");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_download_missing_link() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/downloadSong")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":{"title":"No link here"}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .request_download(&TrackId::new(TRACK))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NoDownloadLink));
        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    async fn test_request_download_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/downloadSong")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .request_download(&TrackId::new(TRACK))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    async fn test_request_download_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/downloadSong")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"message":"You are not subscribed to this API."}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .request_download(&TrackId::new(TRACK))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status(StatusCode::FORBIDDEN)));
        assert!(!err.is_malformed_response());
    }

    #[tokio::test]
    async fn test_request_download_connection_refused() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ApiConfig::default()
        });

        let err = client
            .request_download(&TrackId::new(TRACK))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::RequestError(_)));
        assert!(!err.is_malformed_response());
    }
}
