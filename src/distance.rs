//! Great-circle distance on a spherical Earth.
//!
//! Distances are in kilometers and inputs are degrees. The metric is handed to
//! the neighbor engine explicitly, so different callers can rank the same
//! store with different formulas.

use crate::config::EARTH_RADIUS_KM;

/// A distance function between two `(latitude, longitude)` points in degrees.
pub trait DistanceMetric: Send + Sync {
    /// Distance in kilometers.
    fn distance_km(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64;
}

/// Built-in metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// Spherical law of cosines
    #[default]
    SphericalCosine,
    /// Haversine formula
    Haversine,
}

impl Metric {
    /// Short name used in logs and the stats endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::SphericalCosine => "spherical_cosine",
            Metric::Haversine => "haversine",
        }
    }
}

impl DistanceMetric for Metric {
    fn distance_km(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        match self {
            Metric::SphericalCosine => spherical_cosine_km(lat1, lon1, lat2, lon2),
            Metric::Haversine => haversine_km(lat1, lon1, lat2, lon2),
        }
    }
}

impl<F> DistanceMetric for F
where
    F: Fn(f64, f64, f64, f64) -> f64 + Send + Sync,
{
    fn distance_km(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        self(lat1, lon1, lat2, lon2)
    }
}

/// Spherical law of cosines.
///
/// `acos(sin φ1 · sin φ2 + cos φ1 · cos φ2 · cos Δλ) · R`
///
/// The cosine argument is clamped to `[-1, 1]`: for identical or antipodal
/// points rounding can push it just outside the domain of `acos`, which would
/// otherwise yield NaN. Identical coordinates return exactly `0.0`.
pub fn spherical_cosine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    // abs() keeps the result bit-identical when the two points are swapped
    let delta_lambda = (lon2 - lon1).abs().to_radians();

    let cosine = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();

    cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Haversine formula, numerically steadier for very short distances.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).abs().to_radians();
    let delta_lambda = (lon2 - lon1).abs().to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    2.0 * a.clamp(0.0, 1.0).sqrt().asin() * EARTH_RADIUS_KM
}
