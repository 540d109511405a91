//! Shared, swappable handle to the current place store.
//!
//! Readers take a snapshot (`Arc<PlaceStore>`) and query it without holding
//! the lock. A reload builds a complete store first and only then swaps the
//! pointer, so a reader sees either the old dataset or the new one.

use std::sync::{Arc, RwLock};

use log::info;

use crate::distance::Metric;
use crate::error_handling::QueryError;
use crate::neighbors::{find_neighbors, NeighborQuery, NeighborResult};
use crate::store::{PlaceRecord, PlaceStore};

/// The two operations the HTTP layer and the CLI consume.
#[derive(Debug)]
pub struct PlaceDirectory {
    current: RwLock<Arc<PlaceStore>>,
    metric: Metric,
}

impl PlaceDirectory {
    /// Wraps `store`, ranking with the spherical law of cosines.
    pub fn new(store: PlaceStore) -> Self {
        Self::with_metric(store, Metric::default())
    }

    /// Wraps `store`, ranking with `metric`.
    pub fn with_metric(store: PlaceStore, metric: Metric) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
            metric,
        }
    }

    /// Distance model used by every query.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The store as of now. Later reloads do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<PlaceStore> {
        // The guarded value is a single Arc; a poisoned lock still holds a whole store.
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Publishes a fully built store and returns the one it replaced.
    pub fn replace(&self, store: PlaceStore) -> Arc<PlaceStore> {
        let store = Arc::new(store);
        let places = store.len();
        let previous = {
            let mut guard = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::replace(&mut *guard, store)
        };
        info!(
            "Place store replaced: {} -> {} places",
            previous.len(),
            places
        );
        previous
    }

    /// Attributes of one place.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NotFound` if no place has this id.
    pub fn get_place(&self, id: i64) -> Result<PlaceRecord, QueryError> {
        self.snapshot()
            .get(id)
            .cloned()
            .ok_or(QueryError::NotFound(id))
    }

    /// Places nearest to `reference_id`, nearest first, reference included.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownPlace` if no place has this id.
    pub fn get_neighbors(
        &self,
        reference_id: i64,
        result_count: Option<usize>,
        limit_to_country: bool,
    ) -> Result<Vec<NeighborResult>, QueryError> {
        let query = NeighborQuery::new(reference_id)
            .with_result_count(result_count)
            .in_country(limit_to_country);
        self.query(&query)
    }

    /// Runs an arbitrary neighbor query against the current snapshot.
    pub fn query(&self, query: &NeighborQuery) -> Result<Vec<NeighborResult>, QueryError> {
        find_neighbors(&self.snapshot(), query, &self.metric)
    }
}
