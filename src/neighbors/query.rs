//! Neighbor query parameters and results.

use serde::Serialize;

use crate::store::PlaceRecord;

/// What to rank and how much of it to return.
///
/// The four combinations of `result_count` and `limit_to_country`:
///
/// | result_count | limit_to_country | result                                   |
/// |--------------|------------------|------------------------------------------|
/// | `None`       | `false`          | every place, nearest first               |
/// | `None`       | `true`           | every place in the reference's country   |
/// | `Some(n)`    | `false`          | the `n` nearest places                   |
/// | `Some(n)`    | `true`           | the `n` nearest places in the country    |
///
/// The reference place is part of the candidate pool and comes back first at
/// distance 0 unless `exclude_reference` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborQuery {
    /// Place to measure from
    pub reference_id: i64,
    /// Maximum number of results; `None` for all
    pub result_count: Option<usize>,
    /// Keep only places sharing the reference's country code
    pub limit_to_country: bool,
    /// Drop the reference itself from the results
    pub exclude_reference: bool,
}

impl NeighborQuery {
    /// Every place, globally, reference included.
    pub fn new(reference_id: i64) -> Self {
        Self {
            reference_id,
            result_count: None,
            limit_to_country: false,
            exclude_reference: false,
        }
    }

    /// Caps the number of results; `Some(0)` yields nothing.
    pub fn with_result_count(mut self, result_count: Option<usize>) -> Self {
        self.result_count = result_count;
        self
    }

    /// Restricts candidates to the reference's country.
    pub fn in_country(mut self, limit_to_country: bool) -> Self {
        self.limit_to_country = limit_to_country;
        self
    }

    /// Leaves the reference place out of its own results.
    pub fn excluding_reference(mut self, exclude_reference: bool) -> Self {
        self.exclude_reference = exclude_reference;
        self
    }
}

/// A place plus its distance from the reference, in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborResult {
    /// GeoNames identifier
    pub id: i64,
    /// Local name
    pub name: String,
    /// ASCII name
    pub ascii_name: String,
    /// Degrees
    pub latitude: f64,
    /// Degrees
    pub longitude: f64,
    /// ISO-3166 alpha-2 code; may be empty
    pub country_code: String,
    /// Kilometers from the reference place
    pub distance: f64,
}

impl NeighborResult {
    pub(crate) fn new(place: &PlaceRecord, distance: f64) -> Self {
        Self {
            id: place.id,
            name: place.name.clone(),
            ascii_name: place.ascii_name.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            country_code: place.country_code.clone(),
            distance,
        }
    }
}
