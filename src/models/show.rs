//! TV-show record type.
//!
//! A show is an open record: a handful of well-known fields plus an arbitrary
//! bag of caller-supplied properties. Create and update accept whatever object
//! the client sends, so every known field is optional and unknown fields are
//! carried through serialization untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A TV-show record.
///
/// Known fields absent from a payload stay `None` and are omitted when the
/// record is serialized back out. Everything else lands in `extra` via
/// `#[serde(flatten)]`, preserving fields like `abstract` across a full
/// create/update round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Opaque unique identifier, assigned by the store on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URI path of the poster image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// First-air timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    /// Any additional caller-supplied fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Show {
    /// True when no field at all was supplied. Empty payloads are rejected
    /// by create and update.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.poster.is_none()
            && self.release.is_none()
            && self.genres.is_none()
            && self.extra.is_empty()
    }

    /// Exact-match id comparison. A record without an id matches nothing.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// True when this show's genre list has a non-empty intersection with
    /// `wanted`. Matching is exact string equality.
    pub fn matches_any_genre(&self, wanted: &[String]) -> bool {
        match &self.genres {
            Some(genres) => genres.iter().any(|g| wanted.iter().any(|w| w == g)),
            None => false,
        }
    }

    /// Replace the record's id, returning the updated record.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
