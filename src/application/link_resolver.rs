use std::sync::Arc;

use log::{debug, warn};

use crate::{
    api::{ApiError, DownloadApi},
    domain::{AppError, DownloadLink, RequestState, SubmitForm, TrackId},
    navigation::Navigator,
    utils::extract_track_id,
};

/// Turns a pasted Spotify link into an opened download link.
///
/// A submit runs in three steps so the UI can await the request without holding the
/// form: `begin` validates and marks the form in flight, `resolve` performs the one
/// outbound call, `finish` navigates or records the error. `submit` chains them.
#[derive(Clone)]
pub struct LinkResolver {
    api: Arc<dyn DownloadApi>,
    navigator: Arc<dyn Navigator>,
}

impl LinkResolver {
    pub fn new(api: Arc<dyn DownloadApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self { api, navigator }
    }

    /// Validate the input and move the form to `InFlight`.
    ///
    /// Returns the track ID to resolve, or `None` if the form was put into an error
    /// state instead. The input is cleared either way.
    pub fn begin(&self, form: &mut SubmitForm) -> Option<TrackId> {
        let input = std::mem::take(&mut form.input);

        if input.is_empty() {
            self.fail(form, AppError::EmptyInput);
            return None;
        }

        match extract_track_id(&input) {
            Some(track_id) => {
                debug!("Submitting track {}", track_id);
                form.state = RequestState::InFlight;
                Some(track_id)
            }
            None => {
                self.fail(form, AppError::InvalidFormat);
                None
            }
        }
    }

    pub async fn resolve(&self, track_id: TrackId) -> Result<DownloadLink, AppError> {
        self.api
            .request_download(&track_id)
            .await
            .map_err(classify_api_error)
    }

    /// Settle an in-flight request: open the link, or show the failure.
    pub fn finish(&self, form: &mut SubmitForm, outcome: Result<DownloadLink, AppError>) {
        let navigated = outcome.and_then(|link| {
            self.navigator
                .navigate_to(link.as_str())
                .map_err(|e| AppError::Navigation(e.to_string()))
        });

        match navigated {
            Ok(()) => {
                debug!("Request settled, back to idle");
                form.state = RequestState::Idle;
            }
            Err(err) => self.fail(form, err),
        }
        form.input.clear();
    }

    /// Run a whole submit against the form.
    ///
    /// Nothing here prevents overlapping calls; the UI disables its button instead.
    pub async fn submit(&self, form: &mut SubmitForm) {
        let Some(track_id) = self.begin(form) else {
            return;
        };
        let outcome = self.resolve(track_id).await;
        self.finish(form, outcome);
    }

    fn fail(&self, form: &mut SubmitForm, err: AppError) {
        warn!("Submit failed: {}", err);
        form.state = RequestState::Error(err.user_message().to_string());
    }
}

fn classify_api_error(err: ApiError) -> AppError {
    if err.is_malformed_response() {
        AppError::MalformedResponse(err.to_string())
    } else {
        AppError::RequestFailed(err.to_string())
    }
}
