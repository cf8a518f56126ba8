pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError, Result};
pub use models::ApiConfig;

use futures::future::BoxFuture;

use crate::domain::{DownloadLink, TrackId};

/// Anything that can turn a track ID into a download link.
///
/// `ApiClient` is the real implementation; tests plug in stubs.
pub trait DownloadApi: Send + Sync {
    fn request_download<'a>(&'a self, track_id: &'a TrackId) -> BoxFuture<'a, Result<DownloadLink>>;
}

impl DownloadApi for ApiClient {
    fn request_download<'a>(&'a self, track_id: &'a TrackId) -> BoxFuture<'a, Result<DownloadLink>> {
        Box::pin(ApiClient::request_download(self, track_id))
    }
}
