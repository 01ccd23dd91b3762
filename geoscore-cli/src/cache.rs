//! Optional SQLite snapshot cache consulted by the `score` command.
//!
//! The cache is active only when both a database path and an address are
//! known; the address is normalised with `location_key` to form the row key.

use camino::Utf8Path;
use chrono::{DateTime, Duration, Utc};
use geoscore_core::{ScoreRequest, ScoreResult};

use crate::CliError;

#[cfg(feature = "store-sqlite")]
use camino::Utf8PathBuf;
#[cfg(feature = "store-sqlite")]
use geoscore_core::{CachedLocation, ScoreStore, SqliteScoreStore, location_key};

/// Score cache for a single command invocation.
#[derive(Debug)]
pub(crate) struct ScoreCache {
    #[cfg(feature = "store-sqlite")]
    slot: Option<CacheSlot>,
}

#[cfg(feature = "store-sqlite")]
#[derive(Debug)]
struct CacheSlot {
    store: SqliteScoreStore,
    path: Utf8PathBuf,
    address: String,
    key: String,
}

#[cfg(feature = "store-sqlite")]
impl ScoreCache {
    pub(crate) fn open(db: Option<&Utf8Path>, address: Option<&str>) -> Result<Self, CliError> {
        let (Some(path), Some(address)) = (db, address) else {
            if db.is_some() {
                log::warn!("no address to key the score cache; scoring without it");
            }
            return Ok(Self { slot: None });
        };

        geoscore_fs::ensure_parent_dir(path).map_err(|source| CliError::PrepareCacheDir {
            path: path.to_path_buf(),
            source,
        })?;
        let store = SqliteScoreStore::open(path.as_std_path()).map_err(|source| {
            CliError::OpenScoreCache {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            slot: Some(CacheSlot {
                store,
                path: path.to_path_buf(),
                address: address.to_owned(),
                key: location_key(address),
            }),
        })
    }

    /// Return the cached result when it is real data no older than `max_age`
    /// that was scored for the same coordinates and business type.
    pub(crate) fn lookup(
        &self,
        request: &ScoreRequest,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> Result<Option<ScoreResult>, CliError> {
        let Some(slot) = &self.slot else {
            return Ok(None);
        };
        let cached = slot
            .store
            .get(&slot.key)
            .map_err(|source| CliError::ReadScoreCache {
                path: slot.path.clone(),
                source,
            })?;
        let fresh = cached.filter(|entry| {
            !entry.is_seeded && entry.is_fresh(now, max_age) && entry.matches(request)
        });
        if fresh.is_some() {
            log::info!("serving cached score for {}", slot.key);
        }
        Ok(fresh.map(|entry| entry.result))
    }

    pub(crate) fn remember(
        &mut self,
        request: &ScoreRequest,
        result: &ScoreResult,
        now: DateTime<Utc>,
    ) -> Result<(), CliError> {
        let Some(slot) = &mut self.slot else {
            return Ok(());
        };
        let entry = CachedLocation {
            address: slot.address.clone(),
            coordinates: request.coordinates,
            business_type: request.business_type.clone(),
            result: result.clone(),
            nearby_places: request.nearby_places.clone(),
            last_updated: now,
            is_seeded: false,
        };
        slot.store
            .put(&slot.key, entry)
            .map_err(|source| CliError::WriteScoreCache {
                path: slot.path.clone(),
                source,
            })
    }
}

#[cfg(not(feature = "store-sqlite"))]
impl ScoreCache {
    pub(crate) fn open(db: Option<&Utf8Path>, _address: Option<&str>) -> Result<Self, CliError> {
        if db.is_some() {
            return Err(CliError::MissingFeature {
                feature: "store-sqlite",
                action: "score caching",
            });
        }
        Ok(Self {})
    }

    pub(crate) fn lookup(
        &self,
        _request: &ScoreRequest,
        _now: DateTime<Utc>,
        _max_age: Duration,
    ) -> Result<Option<ScoreResult>, CliError> {
        Ok(None)
    }

    pub(crate) fn remember(
        &mut self,
        _request: &ScoreRequest,
        _result: &ScoreResult,
        _now: DateTime<Utc>,
    ) -> Result<(), CliError> {
        Ok(())
    }
}
