//! Path storage module
//!
//! This module provides the `Path` struct: an ordered, immutable sequence of
//! coordinates together with the radius of the sphere they live on.

use crate::{Coordinate, sphere};
use geo::LineString;

/// An ordered sequence of coordinates in flight order, on a sphere of `radius`
///
/// Paths are never mutated after construction. Simplification produces a new
/// `Path` with the same radius and leaves the input untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Coordinates in traversal order
    points: Vec<Coordinate>,
    /// Sphere radius, in the unit of every derived length (kilometers by default)
    radius: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Path {
    /// Create a new path from coordinates and a sphere radius
    ///
    /// # Arguments
    /// * `points` - Coordinates in traversal order, assumed to be within range
    /// * `radius` - Sphere radius, must be positive
    pub fn new(points: Vec<Coordinate>, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { points, radius }
    }

    /// Create a new path on a sphere with the mean Earth radius in kilometers
    pub fn with_earth_radius(points: Vec<Coordinate>) -> Self {
        Self::new(points, sphere::EARTH_RADIUS_KM)
    }

    /// Access the coordinates
    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consume the path and return the owned coordinates
    #[inline]
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Sphere radius used to interpret the coordinates
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of coordinates
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no coordinates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First coordinate, if any
    #[inline]
    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    /// Last coordinate, if any
    #[inline]
    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    /// Total great-circle length of the path
    ///
    /// Sum of haversine distances between consecutive coordinates; 0 for paths
    /// with fewer than two points.
    pub fn total_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| sphere::haversine_distance(&pair[0], &pair[1], self.radius))
            .sum()
    }

    /// Convert to a `geo::LineString` (x = longitude, y = latitude)
    pub fn to_line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|c| geo::Coord {
                x: c.longitude,
                y: c.latitude,
            })
            .collect()
    }
}
