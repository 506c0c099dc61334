//! Greedy window-growing simplification

use super::{Simplifier, SimplifierKind};
use crate::{Coordinate, Path, sphere};

/// Point count above which the quadratic worst case becomes noticeable
const LARGE_PATH_WARNING_THRESHOLD: usize = 100_000;

/// Single-pass simplifier that extends a segment until an interior point deviates
///
/// Does not guarantee the minimal point count for a tolerance, but needs no
/// recursion and only allocates the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Simplifier for Greedy {
    fn kind(&self) -> SimplifierKind {
        SimplifierKind::Greedy
    }

    fn simplify(&self, path: &Path, tolerance_km: f64) -> Path {
        #[cfg(feature = "profiling")]
        profiling::scope!("greedy::simplify");

        if path.len() >= LARGE_PATH_WARNING_THRESHOLD {
            tracing::warn!(
                "Greedy simplification of {} points may take a long time (quadratic worst case)",
                path.len()
            );
        }

        if path.len() <= 2 {
            return path.clone();
        }

        let points = path.points();
        let radius = path.radius();
        let last_index = points.len() - 1;

        let mut kept = vec![points[0]];
        let mut start = 0;
        while start < last_index {
            let mut end = start + 1;
            while end <= last_index && window_fits(points, start, end, tolerance_km, radius) {
                end += 1;
            }
            start = end - 1;
            kept.push(points[start]);
        }

        Path::new(kept, radius)
    }
}

/// Check that every point strictly between `start` and `end` is within tolerance
/// of the segment joining them
#[inline]
fn window_fits(points: &[Coordinate], start: usize, end: usize, tolerance: f64, radius: f64) -> bool {
    let seg_start = &points[start];
    let seg_end = &points[end];
    points[start + 1..end]
        .iter()
        .all(|p| sphere::perpendicular_distance(p, seg_start, seg_end, radius) <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(f64, f64)]) -> Path {
        Path::with_earth_radius(
            points
                .iter()
                .map(|&(lat, lon)| Coordinate::new(lat, lon))
                .collect(),
        )
    }

    #[test]
    fn test_short_paths_unchanged() {
        for input in [path(&[]), path(&[(1.0, 1.0)]), path(&[(0.0, 0.0), (1.0, 1.0)])] {
            assert_eq!(Greedy.simplify(&input, 1.0), input);
        }
    }

    #[test]
    fn test_near_collinear_point_dropped() {
        let input = path(&[(0.0, 0.0), (0.0001, 0.0001), (0.0, 90.0)]);
        let result = Greedy.simplify(&input, 1.0);
        assert_eq!(result, path(&[(0.0, 0.0), (0.0, 90.0)]));
    }

    #[test]
    fn test_meridian_collapses() {
        let input = path(&[(-90.0, 0.0), (-45.0, 0.0), (0.0, 0.0), (45.0, 0.0), (90.0, 0.0)]);
        let result = Greedy.simplify(&input, 1.0);
        assert_eq!(result, path(&[(-90.0, 0.0), (90.0, 0.0)]));
    }

    #[test]
    fn test_right_angle_retained() {
        let input = path(&[(0.0, 0.0), (0.0, 90.0), (90.0, 0.0)]);
        let result = Greedy.simplify(&input, 0.01);
        assert_eq!(result, input);
    }

    #[test]
    fn test_window_restarts_at_last_fitting_point() {
        // Straight equator run, then a turn north
        let input = path(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (1.0, 2.0), (2.0, 2.0)]);
        let result = Greedy.simplify(&input, 1.0);
        assert_eq!(result, path(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]));
    }

    #[test]
    fn test_zero_tolerance_keeps_every_bend() {
        let input = path(&[(0.0, 0.0), (0.5, 1.0), (0.0, 2.0), (0.5, 3.0), (0.0, 4.0)]);
        let result = Greedy.simplify(&input, 0.0);
        assert_eq!(result, input);
    }

    #[test]
    fn test_deviation_exactly_at_tolerance_is_dropped() {
        let input = path(&[(0.0, 0.0), (1.0, 5.0), (0.0, 10.0)]);
        let deviation = sphere::perpendicular_distance(
            &input.points()[1],
            &input.points()[0],
            &input.points()[2],
            input.radius(),
        );
        assert_eq!(Greedy.simplify(&input, deviation).len(), 2);
        assert_eq!(Greedy.simplify(&input, deviation * 0.999).len(), 3);
    }

    #[test]
    fn test_window_fits_with_no_interior_points() {
        let points = [Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)];
        assert!(window_fits(&points, 0, 1, 0.0, 6371.0));
    }

    #[test]
    fn test_uses_path_radius() {
        // 0.5 degree bump: ~55.6 km on Earth, ~8.7 km on a 1000 km sphere
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.5, 1.0),
            Coordinate::new(0.0, 2.0),
        ];
        let small = Path::new(points.clone(), 1000.0);
        let earth = Path::with_earth_radius(points);

        assert_eq!(Greedy.simplify(&small, 20.0).len(), 2);
        assert_eq!(Greedy.simplify(&earth, 20.0).len(), 3);
    }
}
