//! Validation, timing and summary statistics shared by every simplifier

use super::{Simplifier, SimplifierKind, get_simplifier};
use crate::{Path, Result, SimplifyError};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Before/after statistics of one simplification run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplificationReport {
    /// Algorithm that produced the result
    pub kind: SimplifierKind,
    /// Maximum allowed deviation in kilometers (or the path's radius unit)
    pub tolerance_km: f64,
    /// Number of points in the input path
    pub original_points: usize,
    /// Number of points in the simplified path
    pub simplified_points: usize,
    /// Great-circle length of the input path
    pub original_length_km: f64,
    /// Great-circle length of the simplified path
    pub simplified_length_km: f64,
    /// Wall-clock time spent inside the algorithm
    pub elapsed: Duration,
}

impl SimplificationReport {
    /// Number of points removed by the simplification
    #[inline]
    pub fn removed_points(&self) -> usize {
        self.original_points.saturating_sub(self.simplified_points)
    }

    /// Fraction of points removed, in [0, 1]; 0 for an empty input
    #[inline]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_points == 0 {
            0.0
        } else {
            self.removed_points() as f64 / self.original_points as f64
        }
    }
}

/// Run `simplifier` over `path`, rejecting invalid tolerances before it starts
///
/// The returned path is exactly what the simplifier produced; the report only
/// observes it.
///
/// # Errors
/// `InvalidTolerance` if `tolerance_km` is negative or NaN.
pub fn simplify_with_report(
    simplifier: &dyn Simplifier,
    path: &Path,
    tolerance_km: f64,
) -> Result<(Path, SimplificationReport)> {
    validate_tolerance(tolerance_km)?;
    Ok(run_timed(simplifier, path, tolerance_km))
}

/// Reject negative and NaN tolerances
#[inline]
fn validate_tolerance(tolerance_km: f64) -> Result<()> {
    if tolerance_km.is_nan() || tolerance_km < 0.0 {
        return Err(SimplifyError::InvalidTolerance(tolerance_km));
    }
    Ok(())
}

/// Time one run and log its summary; the tolerance must already be valid
fn run_timed(
    simplifier: &dyn Simplifier,
    path: &Path,
    tolerance_km: f64,
) -> (Path, SimplificationReport) {
    let kind = simplifier.kind();
    tracing::debug!(
        "Simplifying {} points with {} (tolerance {} km)",
        path.len(),
        kind,
        tolerance_km
    );

    let start = Instant::now();
    let simplified = simplifier.simplify(path, tolerance_km);
    let elapsed = start.elapsed();

    let report = SimplificationReport {
        kind,
        tolerance_km,
        original_points: path.len(),
        simplified_points: simplified.len(),
        original_length_km: path.total_length(),
        simplified_length_km: simplified.total_length(),
        elapsed,
    };

    tracing::info!(
        "{}: {} -> {} points, length {:.3} -> {:.3} km, in {:?}",
        kind,
        report.original_points,
        report.simplified_points,
        report.original_length_km,
        report.simplified_length_km,
        elapsed
    );

    (simplified, report)
}

/// Run several algorithms over the same path in parallel
///
/// Results are returned in the order of `kinds`. The tolerance is validated once,
/// before any algorithm starts.
pub fn simplify_all(
    kinds: &[SimplifierKind],
    path: &Path,
    tolerance_km: f64,
) -> Result<Vec<(Path, SimplificationReport)>> {
    validate_tolerance(tolerance_km)?;

    Ok(kinds
        .par_iter()
        .map(|&kind| run_timed(get_simplifier(kind), path, tolerance_km))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, DouglasPeucker, Greedy};

    fn zigzag() -> Path {
        Path::with_earth_radius(
            (0..20)
                .map(|i| Coordinate::new(if i % 2 == 0 { 0.0 } else { 0.1 }, i as f64 * 0.5))
                .collect(),
        )
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let result = simplify_with_report(&DouglasPeucker, &zigzag(), -0.5);
        assert!(matches!(result, Err(SimplifyError::InvalidTolerance(t)) if t == -0.5));
    }

    #[test]
    fn test_nan_tolerance_rejected() {
        let result = simplify_with_report(&Greedy, &zigzag(), f64::NAN);
        assert!(matches!(result, Err(SimplifyError::InvalidTolerance(_))));
    }

    #[test]
    fn test_report_matches_output() {
        let input = zigzag();
        let (simplified, report) = simplify_with_report(&Greedy, &input, 100.0).unwrap();

        assert_eq!(report.kind, SimplifierKind::Greedy);
        assert_eq!(report.tolerance_km, 100.0);
        assert_eq!(report.original_points, 20);
        assert_eq!(report.simplified_points, simplified.len());
        assert!((report.original_length_km - input.total_length()).abs() < 1e-9);
        assert!((report.simplified_length_km - simplified.total_length()).abs() < 1e-9);
        assert!(report.simplified_length_km <= report.original_length_km);
    }

    #[test]
    fn test_wrapper_does_not_change_result() {
        let input = zigzag();
        let direct = DouglasPeucker.simplify(&input, 5.0);
        let (wrapped, _) = simplify_with_report(&DouglasPeucker, &input, 5.0).unwrap();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_reduction_ratio() {
        let report = SimplificationReport {
            kind: SimplifierKind::DouglasPeucker,
            tolerance_km: 1.0,
            original_points: 10,
            simplified_points: 4,
            original_length_km: 0.0,
            simplified_length_km: 0.0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(report.removed_points(), 6);
        assert!((report.reduction_ratio() - 0.6).abs() < 1e-12);

        let empty = SimplificationReport {
            original_points: 0,
            simplified_points: 0,
            ..report
        };
        assert_eq!(empty.reduction_ratio(), 0.0);
    }

    #[test]
    fn test_simplify_all_preserves_order() {
        let kinds = [SimplifierKind::Greedy, SimplifierKind::DouglasPeucker];
        let results = simplify_all(&kinds, &zigzag(), 1.0).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].1.kind, SimplifierKind::Greedy);
        assert_eq!(results[1].1.kind, SimplifierKind::DouglasPeucker);
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(validate_tolerance(0.0).is_ok());
        assert!(validate_tolerance(12.5).is_ok());
        assert!(validate_tolerance(f64::INFINITY).is_ok());
        assert!(matches!(
            validate_tolerance(-f64::MIN_POSITIVE),
            Err(SimplifyError::InvalidTolerance(_))
        ));
        assert!(matches!(
            validate_tolerance(f64::NAN),
            Err(SimplifyError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_simplify_all_rejects_nan_tolerance() {
        let result = simplify_all(&SimplifierKind::ALL, &zigzag(), f64::NAN);
        assert!(matches!(result, Err(SimplifyError::InvalidTolerance(_))));
    }

    #[test]
    fn test_simplify_all_rejects_negative_tolerance() {
        assert!(simplify_all(&SimplifierKind::ALL, &zigzag(), -1.0).is_err());
    }
}
