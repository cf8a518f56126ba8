use regex::Regex;

use crate::domain::TrackId;

/// Extract the Spotify track ID from a share link.
///
/// Looks for the first `track/` segment followed by an alphanumeric run. Anything that
/// does not contain one (empty input, other hosts, album links) yields `None`.
pub fn extract_track_id(url: &str) -> Option<TrackId> {
    let re = Regex::new(r"track/([A-Za-z0-9]+)").ok()?;
    let caps = re.captures(url)?;
    caps.get(1).map(|m| TrackId::new(m.as_str()))
}
