//! Unit tests for the neighbor engine.

use super::*;
use crate::distance::Metric;

fn four_cities() -> PlaceStore {
    PlaceStore::from_records(vec![
        PlaceRecord::new(1, "Paris", "Paris", 48.8566, 2.3522, "FR"),
        PlaceRecord::new(2, "Lyon", "Lyon", 45.7640, 4.8357, "FR"),
        PlaceRecord::new(3, "London", "London", 51.5074, -0.1278, "GB"),
        PlaceRecord::new(4, "Berlin", "Berlin", 52.5200, 13.4050, "DE"),
    ])
    .expect("fixture should load")
}

fn ids(results: &[NeighborResult]) -> Vec<i64> {
    results.iter().map(|r| r.id).collect()
}

fn query(store: &PlaceStore, q: NeighborQuery) -> Vec<NeighborResult> {
    find_neighbors(store, &q, &Metric::SphericalCosine).expect("query should succeed")
}

#[test]
fn test_unlimited_global_query_orders_by_distance() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(1));

    assert_eq!(ids(&results), vec![1, 3, 2, 4]);
    assert_eq!(results[0].distance, 0.0);
    assert!((results[1].distance - 343.5).abs() < 1.0);
    assert!((results[2].distance - 391.5).abs() < 1.5);
}

#[test]
fn test_country_limited_with_count_keeps_reference_only() {
    let store = four_cities();
    let results = query(
        &store,
        NeighborQuery::new(1)
            .with_result_count(Some(1))
            .in_country(true),
    );
    assert_eq!(ids(&results), vec![1]);
}

#[test]
fn test_country_limited_unlimited() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(1).in_country(true));
    assert_eq!(ids(&results), vec![1, 2]);
    assert!(results.iter().all(|r| r.country_code == "FR"));
}

#[test]
fn test_global_with_count() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(1).with_result_count(Some(2)));
    assert_eq!(ids(&results), vec![1, 3]);
}

#[test]
fn test_count_larger_than_pool_returns_everything() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(4).with_result_count(Some(100)));
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].id, 4);
}

#[test]
fn test_zero_count_returns_empty() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(1).with_result_count(Some(0)));
    assert!(results.is_empty());
}

#[test]
fn test_unknown_reference() {
    let store = four_cities();
    let err = find_neighbors(&store, &NeighborQuery::new(9999), &Metric::SphericalCosine)
        .unwrap_err();
    assert_eq!(err, QueryError::UnknownPlace(9999));
}

#[test]
fn test_unknown_reference_wins_over_zero_count() {
    let store = four_cities();
    let err = find_neighbors(
        &store,
        &NeighborQuery::new(9999).with_result_count(Some(0)),
        &Metric::SphericalCosine,
    )
    .unwrap_err();
    assert_eq!(err, QueryError::UnknownPlace(9999));
}

#[test]
fn test_unknown_reference_never_calls_metric() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let store = four_cities();
    let calls = AtomicUsize::new(0);
    let counting = |_: f64, _: f64, _: f64, _: f64| {
        calls.fetch_add(1, Ordering::SeqCst);
        0.0
    };

    assert!(find_neighbors(&store, &NeighborQuery::new(9999), &counting).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    find_neighbors(&store, &NeighborQuery::new(1), &counting).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_exclude_reference() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(1).excluding_reference(true));
    assert_eq!(ids(&results), vec![3, 2, 4]);

    let results = query(
        &store,
        NeighborQuery::new(1)
            .in_country(true)
            .excluding_reference(true)
            .with_result_count(Some(1)),
    );
    assert_eq!(ids(&results), vec![2]);
}

#[test]
fn test_results_carry_all_fields() {
    let store = four_cities();
    let results = query(&store, NeighborQuery::new(3).with_result_count(Some(1)));
    let london = &results[0];
    assert_eq!(london.id, 3);
    assert_eq!(london.name, "London");
    assert_eq!(london.ascii_name, "London");
    assert_eq!(london.latitude, 51.5074);
    assert_eq!(london.longitude, -0.1278);
    assert_eq!(london.country_code, "GB");
    assert_eq!(london.distance, 0.0);
}

#[test]
fn test_ties_break_by_scan_order() {
    // East, West and East again are all one degree of longitude from the origin.
    let store = PlaceStore::from_records(vec![
        PlaceRecord::new(10, "Origin", "Origin", 0.0, 0.0, "AA"),
        PlaceRecord::new(11, "East", "East", 0.0, 1.0, "AA"),
        PlaceRecord::new(12, "West", "West", 0.0, -1.0, "AA"),
        PlaceRecord::new(13, "Far", "Far", 0.0, 5.0, "AA"),
        PlaceRecord::new(14, "East again", "East again", 0.0, 1.0, "AA"),
    ])
    .unwrap();

    let all = query(&store, NeighborQuery::new(10));
    assert_eq!(ids(&all), vec![10, 11, 12, 14, 13]);

    for n in 0..=all.len() + 1 {
        let limited = query(&store, NeighborQuery::new(10).with_result_count(Some(n)));
        let expected = &all[..n.min(all.len())];
        assert_eq!(limited.as_slice(), expected, "prefix mismatch for n = {n}");
    }
}

#[test]
fn test_truncation_matches_prefix_of_unlimited_on_grid() {
    let mut records = Vec::new();
    let mut id = 0;
    for lat in (-60..=60).step_by(15) {
        for lon in (-170..=170).step_by(20) {
            id += 1;
            let country = if lon < 0 { "WW" } else { "EE" };
            records.push(PlaceRecord::new(
                id,
                format!("p{id}"),
                format!("p{id}"),
                lat as f64,
                lon as f64,
                country,
            ));
        }
    }
    let store = PlaceStore::from_records(records).unwrap();

    for reference in [1, 37, id] {
        for in_country in [false, true] {
            let base = NeighborQuery::new(reference).in_country(in_country);
            let all = query(&store, base);

            assert!(all.windows(2).all(|w| w[0].distance <= w[1].distance));
            if in_country {
                let code = &store.get(reference).unwrap().country_code;
                assert!(all.iter().all(|r| &r.country_code == code));
            } else {
                assert_eq!(all.len(), store.len());
            }

            for n in [1, 2, 5, 17, all.len(), all.len() + 3] {
                let limited = query(&store, base.with_result_count(Some(n)));
                assert_eq!(limited.len(), n.min(all.len()));
                assert_eq!(limited.as_slice(), &all[..limited.len()]);
            }
        }
    }
}

#[test]
fn test_empty_country_codes_match_each_other() {
    let store = PlaceStore::from_records(vec![
        PlaceRecord::new(1, "Sea", "Sea", 0.0, 0.0, ""),
        PlaceRecord::new(2, "Island", "Island", 0.0, 1.0, ""),
        PlaceRecord::new(3, "Coast", "Coast", 0.0, 0.5, "AA"),
    ])
    .unwrap();

    let results = query(&store, NeighborQuery::new(1).in_country(true));
    assert_eq!(ids(&results), vec![1, 2]);
}

#[test]
fn test_non_finite_coordinates_sort_last() {
    let store = PlaceStore::from_records(vec![
        PlaceRecord::new(1, "Here", "Here", 10.0, 10.0, "AA"),
        PlaceRecord::new(2, "Broken", "Broken", f64::NAN, 10.0, "AA"),
        PlaceRecord::new(3, "There", "There", 11.0, 10.0, "AA"),
    ])
    .unwrap();

    let results = query(&store, NeighborQuery::new(1));
    assert_eq!(ids(&results), vec![1, 3, 2]);
    assert!(results[2].distance.is_nan());
}

#[test]
fn test_haversine_metric_produces_same_order() {
    let store = four_cities();
    let results = find_neighbors(&store, &NeighborQuery::new(1), &Metric::Haversine).unwrap();
    assert_eq!(ids(&results), vec![1, 3, 2, 4]);
}
