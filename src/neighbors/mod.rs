//! Nearest-neighbor queries over a [`PlaceStore`].
//!
//! A query is a linear scan: every candidate gets a distance from the
//! reference place, then the candidates are ordered nearest first. Ties are
//! broken by scan position, which makes the order total: the first `n`
//! results of an unlimited query are exactly what a `result_count = n` query
//! returns.

mod query;

use std::cmp::Ordering;

use log::trace;

use crate::distance::DistanceMetric;
use crate::error_handling::QueryError;
use crate::store::{PlaceRecord, PlaceStore};

pub use query::{NeighborQuery, NeighborResult};

struct Candidate<'a> {
    place: &'a PlaceRecord,
    position: usize,
    distance: f64,
}

/// Nearest first; NaN distances (non-finite coordinates) sort last.
fn by_distance(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.distance
        .is_nan()
        .cmp(&b.distance.is_nan())
        .then_with(|| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.position.cmp(&b.position))
}

/// Ranks the places of `store` by distance from `query.reference_id`.
///
/// # Errors
///
/// Returns `QueryError::UnknownPlace` if the reference id is not in the store.
/// Nothing is scanned in that case.
pub fn find_neighbors<M>(
    store: &PlaceStore,
    query: &NeighborQuery,
    metric: &M,
) -> Result<Vec<NeighborResult>, QueryError>
where
    M: DistanceMetric + ?Sized,
{
    let reference = store
        .get(query.reference_id)
        .ok_or(QueryError::UnknownPlace(query.reference_id))?;

    if query.result_count == Some(0) {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<Candidate<'_>> = store
        .scan()
        .enumerate()
        .filter(|(_, place)| {
            !query.limit_to_country || place.country_code == reference.country_code
        })
        .filter(|(_, place)| !query.exclude_reference || place.id != reference.id)
        .map(|(position, place)| Candidate {
            place,
            position,
            distance: metric.distance_km(
                reference.latitude,
                reference.longitude,
                place.latitude,
                place.longitude,
            ),
        })
        .collect();

    trace!(
        "Ranking {} candidates around place {}",
        candidates.len(),
        reference.id
    );

    // Only the first n have to be ordered; select them before sorting.
    if let Some(count) = query.result_count {
        if count < candidates.len() {
            candidates.select_nth_unstable_by(count - 1, by_distance);
            candidates.truncate(count);
        }
    }
    candidates.sort_unstable_by(by_distance);

    Ok(candidates
        .into_iter()
        .map(|candidate| NeighborResult::new(candidate.place, candidate.distance))
        .collect())
}

#[cfg(test)]
mod tests;
