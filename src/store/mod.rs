//! In-memory place store.
//!
//! Records live in a `Vec` in load order, with a `HashMap` from id to slot for
//! point lookups. A store is built in one shot by [`PlaceStore::load`] and is
//! read-only afterwards; sharing it across threads needs no locking.
//!
//! Duplicate ids are rejected: a load that repeats an id fails as a whole.

mod directory;
mod record;

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error_handling::LoadError;

pub use directory::PlaceDirectory;
pub use record::{PlaceRecord, RawPlaceRow};

/// Every loaded place, keyed by id.
#[derive(Debug, Default)]
pub struct PlaceStore {
    records: Vec<PlaceRecord>,
    index: HashMap<i64, usize>,
}

impl PlaceStore {
    /// Builds a store from raw extract rows.
    ///
    /// # Errors
    ///
    /// - `LoadError::MalformedRow` if an id, latitude or longitude is not numeric
    /// - `LoadError::DuplicateId` if an id appears twice
    /// - `LoadError::Storage` if the backing storage cannot be allocated
    pub fn load<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = RawPlaceRow>,
    {
        Self::load_stream(rows.into_iter().map(Ok))
    }

    /// Like [`PlaceStore::load`], for row sources that can themselves fail
    /// (a file being read lazily).
    ///
    /// The first error aborts the load.
    pub fn load_stream<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = Result<RawPlaceRow, LoadError>>,
    {
        let rows = rows.into_iter();
        let mut store = Self::with_capacity(rows.size_hint().0)?;
        for row in rows {
            let row = row?;
            let line = row.line;
            store.insert(row.parse()?, line)?;
        }
        debug!("Loaded {} places", store.len());
        Ok(store)
    }

    /// Builds a store from already-parsed records.
    ///
    /// Records are numbered from 1 in iteration order for error messages.
    pub fn from_records<I>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = PlaceRecord>,
    {
        let records = records.into_iter();
        let mut store = Self::with_capacity(records.size_hint().0)?;
        for (position, record) in records.enumerate() {
            store.insert(record, position as u64 + 1)?;
        }
        Ok(store)
    }

    fn with_capacity(capacity: usize) -> Result<Self, LoadError> {
        let mut store = Self::default();
        store.records.try_reserve(capacity)?;
        store.index.try_reserve(capacity)?;
        Ok(store)
    }

    fn insert(&mut self, record: PlaceRecord, line: u64) -> Result<(), LoadError> {
        if self.index.contains_key(&record.id) {
            return Err(LoadError::DuplicateId {
                id: record.id,
                line,
            });
        }
        self.records.try_reserve(1)?;
        self.index.try_reserve(1)?;
        self.index.insert(record.id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Exact-match lookup.
    pub fn get(&self, id: i64) -> Option<&PlaceRecord> {
        self.index.get(&id).map(|&slot| &self.records[slot])
    }

    /// Every record, in load order. Each call starts a fresh pass.
    pub fn scan(&self) -> impl Iterator<Item = &PlaceRecord> + '_ {
        self.records.iter()
    }

    /// Number of loaded places.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of places per country code, sorted by code.
    pub fn country_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.country_code.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
