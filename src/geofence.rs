//! Geofence distance evaluation.
//!
//! Attendance check-in is gated to people physically present within a
//! circular boundary around a site coordinate.  The `geofence` module
//! computes the great-circle distance between the reporter's position
//! and the site centre using the Haversine formula and decides whether
//! the position falls inside the allowed radius.

use crate::error::{EngineError, EngineResult};
use crate::models::{Coordinate, GeofenceResult};

/// Mean Earth radius in meters, as used by the Haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Radius applied when the caller supplies no radius (or a
/// non-positive one).
pub const DEFAULT_RADIUS_M: f64 = 100.0;

/// Great-circle distance in meters between two coordinates.
///
/// Haversine on a sphere of radius [`EARTH_RADIUS_M`].  The formula is
/// symmetric in its arguments and numerically stable for small
/// distances, which is the regime attendance check-ins live in.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Evaluates whether `point` lies within `allowed_radius_meters` of
/// `center`.
///
/// A `None` or non-positive radius falls back to [`DEFAULT_RADIUS_M`].
/// The boundary is inclusive: a distance exactly equal to the radius
/// is within range.  Coordinates outside the valid degree ranges fail
/// with [`EngineError::InvalidCoordinate`].
pub fn evaluate(
    point: &Coordinate,
    center: &Coordinate,
    allowed_radius_meters: Option<f64>,
) -> EngineResult<GeofenceResult> {
    for c in [point, center] {
        if !c.is_valid() {
            return Err(EngineError::InvalidCoordinate {
                latitude: c.latitude,
                longitude: c.longitude,
            });
        }
    }
    let radius = allowed_radius_meters
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_RADIUS_M);
    let distance_meters = haversine_distance(point, center);
    Ok(GeofenceResult {
        distance_meters,
        within_range: distance_meters <= radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICE: Coordinate = Coordinate {
        latitude: 30.0444,
        longitude: 31.2357,
    };

    #[test]
    fn zero_distance_at_same_point() {
        let result = evaluate(&OFFICE, &OFFICE, Some(0.5)).unwrap();
        assert_eq!(result.distance_meters, 0.0);
        assert!(result.within_range);
    }

    #[test]
    fn distance_is_symmetric() {
        let home = Coordinate::new(30.0626, 31.2497);
        let there = haversine_distance(&OFFICE, &home);
        let back = haversine_distance(&home, &OFFICE);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn known_distance_between_cities() {
        // Paris to London is roughly 344 km great-circle.
        let paris = Coordinate::new(48.8566, 2.3522);
        let london = Coordinate::new(51.5074, -0.1278);
        let d = haversine_distance(&paris, &london);
        assert!((d - 344_000.0).abs() < 2_000.0, "got {d}");
    }

    #[test]
    fn boundary_distance_counts_as_within() {
        let point = Coordinate::new(0.0, 0.0);
        let center = Coordinate::new(0.0, 0.001);
        let d = haversine_distance(&point, &center);
        let result = evaluate(&point, &center, Some(d)).unwrap();
        assert!(result.within_range);
        // Just inside the boundary the decision flips.
        let result = evaluate(&point, &center, Some(d - 0.001)).unwrap();
        assert!(!result.within_range);
    }

    #[test]
    fn missing_or_zero_radius_defaults_to_100m() {
        let near = Coordinate::new(30.0444, 31.23625);
        let result = evaluate(&near, &OFFICE, None).unwrap();
        assert!(result.distance_meters < DEFAULT_RADIUS_M);
        assert!(result.within_range);
        let zeroed = evaluate(&near, &OFFICE, Some(0.0)).unwrap();
        assert_eq!(result, zeroed);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let bad = Coordinate::new(91.0, 0.0);
        let err = evaluate(&bad, &OFFICE, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCoordinate { .. }));
        let bad = Coordinate::new(0.0, -180.5);
        assert!(evaluate(&OFFICE, &bad, None).is_err());
    }
}
