//! Data Transfer Objects for the HTTP API.
//!
//! Show records serialize directly, so the only DTO here is the listing
//! query. The genre parameter arrives as one comma-separated string.

use serde::{Deserialize, Serialize};

/// Query parameters for the show listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShowsQuery {
    /// Comma-separated genre names, e.g. `?genres=sci-fi,horror`
    #[serde(default)]
    pub genres: Option<String>,
}

impl ShowsQuery {
    /// Split the raw parameter into individual genre strings.
    ///
    /// Absent or empty parameters mean "no filter". Values are taken
    /// literally after standard query decoding, so `a,,b` yields an empty
    /// genre in the middle that simply matches nothing.
    pub fn genre_list(&self) -> Option<Vec<String>> {
        let raw = self.genres.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        Some(raw.split(',').map(str::to_string).collect())
    }
}
