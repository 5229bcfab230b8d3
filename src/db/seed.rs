//! Static seed dataset.
//!
//! The catalog is initialized from `data/tv-shows.json`, embedded at compile
//! time. The file is parsed once per process; reseeding hands out clones of
//! the same parsed records.

use std::sync::OnceLock;

use crate::models::Show;

const SEED_JSON: &str = include_str!("../../data/tv-shows.json");

static SEED: OnceLock<Vec<Show>> = OnceLock::new();

/// The immutable seed dataset, in seed order.
pub fn seed_shows() -> &'static [Show] {
    SEED.get_or_init(|| {
        serde_json::from_str(SEED_JSON).expect("embedded seed dataset is valid JSON")
    })
}
