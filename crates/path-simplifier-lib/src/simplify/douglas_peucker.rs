//! Divide-and-conquer (Douglas-Peucker) simplification on the sphere

use super::{Simplifier, SimplifierKind};
use crate::{Coordinate, Path, sphere};

/// Divide-and-conquer simplifier
///
/// Keeps the point farthest from the chord of a range whenever it deviates by
/// more than the tolerance, then processes both halves the same way. Every dropped point is
/// within the tolerance of the output segment that spans it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DouglasPeucker;

impl Simplifier for DouglasPeucker {
    fn kind(&self) -> SimplifierKind {
        SimplifierKind::DouglasPeucker
    }

    fn simplify(&self, path: &Path, tolerance_km: f64) -> Path {
        #[cfg(feature = "profiling")]
        profiling::scope!("douglas_peucker::simplify");

        if path.len() <= 2 {
            return path.clone();
        }

        let points = path.points();
        let kept = simplify_ranges(points, tolerance_km, path.radius());
        Path::new(kept, path.radius())
    }
}

/// Retained points of `points`, in order
///
/// Ranges come from an explicit work stack, so nesting depth is bounded by the
/// heap and not by the thread stack. The right half of a split is pushed before the
/// left, which keeps the output in traversal order and emits every split point
/// exactly once (as the end of its left range).
fn simplify_ranges(points: &[Coordinate], tolerance: f64, radius: f64) -> Vec<Coordinate> {
    let mut kept = vec![points[0]];
    let mut pending = vec![(0, points.len() - 1)];

    while let Some((start, end)) = pending.pop() {
        if end - start < 2 {
            kept.extend_from_slice(&points[start + 1..=end]);
            continue;
        }

        let (max_index, max_distance) = farthest_point(points, start, end, radius);
        if max_distance > tolerance {
            pending.push((max_index, end));
            pending.push((start, max_index));
        } else {
            kept.push(points[end]);
        }
    }

    kept
}

/// Index and distance of the interior point farthest from the chord `start`-`end`
///
/// Ties keep the leftmost index.
fn farthest_point(points: &[Coordinate], start: usize, end: usize, radius: f64) -> (usize, f64) {
    let seg_start = &points[start];
    let seg_end = &points[end];

    let mut max_index = start + 1;
    let mut max_distance = 0.0;
    for (offset, point) in points[start + 1..end].iter().enumerate() {
        let distance = sphere::perpendicular_distance(point, seg_start, seg_end, radius);
        if distance > max_distance {
            max_distance = distance;
            max_index = start + 1 + offset;
        }
    }
    (max_index, max_distance)
}
