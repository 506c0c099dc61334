//! Geographic coordinate value type

use crate::{Result, SimplifyError};
use geo::Point;

/// Valid latitude range in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// A (latitude, longitude) pair in degrees
///
/// The core trusts that every coordinate it receives is within range; use
/// [`Coordinate::try_new`] at input boundaries to enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting NaN and out-of-range values
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if Self::is_valid(latitude, longitude) {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(SimplifyError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Check whether a latitude/longitude pair is within the valid ranges
    ///
    /// NaN fails every comparison and is therefore rejected.
    #[inline(always)]
    pub fn is_valid(latitude: f64, longitude: f64) -> bool {
        (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
    }

    /// Latitude in radians
    #[inline(always)]
    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    #[inline(always)]
    pub fn longitude_radians(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl From<Coordinate> for Point<f64> {
    #[inline]
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    #[inline]
    fn from(point: Point<f64>) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}
