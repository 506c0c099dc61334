//! Path Simplifier Library - Error-bounded reduction of geographic paths
//!
//! This library reduces the number of points in a sequence of geographic coordinates
//! (a flight or GPS trajectory) while bounding the perpendicular deviation of every
//! dropped point. All geometry is computed on an idealized sphere of a given radius.
//!
//! # Architecture
//!
//! - **[`sphere`]**: Stateless great-circle primitives (distance, bearing, cross-track)
//! - **[`Coordinate`]**: Latitude/longitude value type
//! - **[`Path`]**: Immutable coordinate sequence plus the sphere radius
//! - **[`Simplifier`]**: The simplification capability, implemented by
//!   [`DouglasPeucker`] (divide-and-conquer) and [`Greedy`] (single forward pass)
//! - **[`SimplifierKind`]**: Closed set of algorithm tags mapped to static instances
//! - **[`simplify_with_report`]**: Uniform validation, timing and logging wrapper
//! - **[`io`]** / **[`generator`]**: CSV input/output and synthetic sample paths
//!
//! # Performance Characteristics
//!
//! - **Douglas-Peucker**: O(N log N) typical, O(N²) worst case, no sub-path copies
//! - **Greedy**: O(N²) worst case, no recursion, O(K) extra memory for K kept points

mod coordinate;
pub mod generator;
pub mod io;
mod path;
mod simplify;
pub mod sphere;

// Public API exports
pub use coordinate::Coordinate;
pub use generator::{GeneratorConfig, generate_path};
pub use path::Path;
pub use simplify::{
    DouglasPeucker, Greedy, SimplificationReport, Simplifier, SimplifierKind, get_simplifier,
    get_simplifier_by_name, simplify_all, simplify_with_report,
};
pub use sphere::EARTH_RADIUS_KM;

/// Error types for the simplifier and its input/output collaborators
#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    #[error("Invalid tolerance: {0} (must be a non-negative number of kilometers)")]
    InvalidTolerance(f64),

    #[error("Unknown simplification algorithm: {0}")]
    UnknownVariant(String),

    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Missing {column} column, headers found: {headers:?}")]
    MissingColumn {
        column: &'static str,
        headers: Vec<String>,
    },

    #[error("Invalid generator configuration: {0}")]
    InvalidGeneratorConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimplifyError>;
