//! Caller-owned cache of computed location scores.
//!
//! The `ScoreStore` trait is a small keyed snapshot store: the scoring
//! engine never reads it, callers consult it before fetching places and
//! scoring. Keys come from [`location_key`], which normalises a free-text
//! address.

use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::{DateTime, Duration, Utc};

use crate::{LatLng, PointOfInterest, ScoreRequest, ScoreResult};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteScoreStore, SqliteScoreStoreError};

/// Normalise an address into a cache key.
///
/// The address is lowercased, every character outside `a-z0-9` becomes `-`,
/// and runs of `-` collapse to one.
///
/// # Examples
/// ```
/// use geoscore_core::location_key;
///
/// assert_eq!(location_key("221B Baker St., London"), "221b-baker-st-london");
/// ```
pub fn location_key(address: &str) -> String {
    let mut key = String::with_capacity(address.len());
    for ch in address.to_lowercase().chars() {
        let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '-'
        };
        if mapped == '-' && key.ends_with('-') {
            continue;
        }
        key.push(mapped);
    }
    key
}

/// A scored location snapshot as kept in a [`ScoreStore`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CachedLocation {
    /// Address the snapshot was requested for.
    pub address: String,
    /// Resolved coordinates.
    pub coordinates: LatLng,
    /// Business-type key the competitors were selected for.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub business_type: Option<String>,
    /// Result computed for the coordinates.
    pub result: ScoreResult,
    /// Places that fed the result.
    pub nearby_places: Vec<PointOfInterest>,
    /// When the snapshot was computed.
    pub last_updated: DateTime<Utc>,
    /// Demo data; never persisted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_seeded: bool,
}

impl CachedLocation {
    /// Report whether the snapshot is at most `max_age` old at `now`.
    ///
    /// Snapshots stamped in the future count as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.last_updated) <= max_age
    }

    /// Report whether the snapshot was scored for the request's coordinates
    /// and business type.
    pub fn matches(&self, request: &ScoreRequest) -> bool {
        self.coordinates == request.coordinates && self.business_type == request.business_type
    }
}

/// Keyed storage for scored location snapshots.
///
/// # Examples
///
/// ```rust
/// use geoscore_core::{CachedLocation, MemoryScoreStore, ScoreStore, location_key};
///
/// fn remember(store: &mut MemoryScoreStore, entry: CachedLocation) {
///     let key = location_key(&entry.address);
///     store.put(&key, entry).unwrap_or_else(|never| match never {});
/// }
///
/// let store = MemoryScoreStore::default();
/// assert!(store.get("1-main-st").unwrap_or_default().is_none());
/// ```
pub trait ScoreStore {
    /// Error raised by the backing storage.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the snapshot stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<CachedLocation>, Self::Error>;

    /// Insert or replace the snapshot stored under `key`.
    fn insert(&mut self, key: &str, entry: CachedLocation) -> Result<(), Self::Error>;

    /// Store a snapshot unless it is seeded demo data.
    fn put(&mut self, key: &str, entry: CachedLocation) -> Result<(), Self::Error> {
        if entry.is_seeded {
            log::debug!("skipping seeded snapshot for {key}");
            return Ok(());
        }
        self.insert(key, entry)
    }
}

/// In-memory [`ScoreStore`] backed by an ordered map.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: BTreeMap<String, CachedLocation>,
}

impl MemoryScoreStore {
    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<CachedLocation>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn insert(&mut self, key: &str, entry: CachedLocation) -> Result<(), Self::Error> {
        self.entries.insert(key.to_owned(), entry);
        Ok(())
    }
}
