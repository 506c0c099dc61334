//! Great-circle geometry on a sphere of arbitrary radius
//!
//! Every function here is pure: angles are in radians, coordinates in degrees and
//! distances in whatever unit the supplied radius uses.

use crate::Coordinate;
use std::f64::consts::FRAC_PI_2;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle angular separation between two coordinates (haversine formula)
///
/// Returns 0 for identical points and PI for antipodal points.
#[inline]
pub fn angular_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let a_lat = a.latitude_radians();
    let b_lat = b.latitude_radians();
    let delta_lat = b_lat - a_lat;
    let delta_lon = b.longitude_radians() - a.longitude_radians();

    let hav = (delta_lat / 2.0).sin().powi(2)
        + a_lat.cos() * b_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * hav.sqrt().atan2((1.0 - hav).sqrt())
}

/// Great-circle distance between two coordinates on a sphere of `radius`
#[inline]
pub fn haversine_distance(a: &Coordinate, b: &Coordinate, radius: f64) -> f64 {
    radius * angular_distance(a, b)
}

/// Initial compass bearing leaving `a` toward `b`, in radians within (-PI, PI]
///
/// 0 is north, PI/2 is east.
#[inline]
pub fn initial_bearing(a: &Coordinate, b: &Coordinate) -> f64 {
    let a_lat = a.latitude_radians();
    let b_lat = b.latitude_radians();
    let delta_lon = b.longitude_radians() - a.longitude_radians();

    let y = delta_lon.sin() * b_lat.cos();
    let x = a_lat.cos() * b_lat.sin() - a_lat.sin() * b_lat.cos() * delta_lon.cos();
    y.atan2(x)
}

/// Shortest great-circle distance from `point` to the segment `seg_start`-`seg_end`
///
/// Unlike the plain cross-track distance, this clamps to the segment: when the
/// point's projection onto the great circle falls before `seg_start` or past
/// `seg_end`, the distance to that endpoint is returned instead.
///
/// # Arguments
/// * `point` - The point whose deviation is measured
/// * `seg_start` - First endpoint of the segment
/// * `seg_end` - Second endpoint of the segment
/// * `radius` - Sphere radius; the result uses the same unit
pub fn perpendicular_distance(
    point: &Coordinate,
    seg_start: &Coordinate,
    seg_end: &Coordinate,
    radius: f64,
) -> f64 {
    let dist_start_to_point = angular_distance(seg_start, point);
    // The bearing toward a coincident point is undefined
    if dist_start_to_point == 0.0 {
        return 0.0;
    }

    let bearing_start_to_point = initial_bearing(seg_start, point);
    let bearing_start_to_end = initial_bearing(seg_start, seg_end);

    // Angular cross-track distance
    let cross_track =
        (dist_start_to_point.sin() * (bearing_start_to_point - bearing_start_to_end).sin()).asin();

    // Angular along-track distance, negative when the projection lies behind the start.
    // Rounding can push the ratio just outside [-1, 1] near the poles.
    let ratio = (dist_start_to_point.cos() / cross_track.cos()).clamp(-1.0, 1.0);
    let mut along_track = ratio.acos();
    if (bearing_start_to_end - bearing_start_to_point).abs() > FRAC_PI_2 {
        along_track = -along_track;
    }

    let along_track_distance = along_track * radius;
    let segment_length = haversine_distance(seg_start, seg_end, radius);

    if along_track_distance < 0.0 {
        haversine_distance(point, seg_start, radius)
    } else if along_track_distance > segment_length {
        haversine_distance(point, seg_end, radius)
    } else {
        (cross_track * radius).abs()
    }
}
