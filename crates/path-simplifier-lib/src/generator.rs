//! Synthetic sample paths
//!
//! Generates a random route made of a few major waypoints joined by densely
//! sampled, slightly noisy straight legs. Useful for demonstrations and
//! benchmarks when no recorded trajectory is at hand.

use crate::coordinate::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::{Coordinate, EARTH_RADIUS_KM, Path, Result, SimplifyError, sphere};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of the sample path generator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of noise-free waypoints the route passes through
    pub major_waypoints: usize,
    /// Exact number of points to produce, distributed by leg length
    pub total_points: Option<usize>,
    /// Peak-to-peak amplitude of the uniform noise, in degrees
    pub noise_degrees: f64,
    /// Points per leg (including its start) when `total_points` is not set
    pub points_per_segment: usize,
    /// Sphere radius attached to the generated path
    pub radius: f64,
    /// Seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            major_waypoints: 11,
            total_points: None,
            noise_degrees: 0.0008,
            points_per_segment: 240,
            radius: EARTH_RADIUS_KM,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Configuration with `major_waypoints` waypoints and default sampling
    pub fn new(major_waypoints: usize) -> Self {
        Self {
            major_waypoints,
            ..Default::default()
        }
    }

    /// Request exactly `total_points` points
    pub fn with_total_points(mut self, total_points: usize) -> Self {
        self.total_points = Some(total_points);
        self
    }

    /// Make the output reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.major_waypoints == 0 {
            return Err(SimplifyError::InvalidGeneratorConfig(
                "at least one major waypoint is required".to_string(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SimplifyError::InvalidGeneratorConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.noise_degrees.is_finite() || self.noise_degrees < 0.0 {
            return Err(SimplifyError::InvalidGeneratorConfig(format!(
                "noise must be non-negative, got {}",
                self.noise_degrees
            )));
        }
        Ok(())
    }
}

/// Generate a random sample path
///
/// # Errors
/// `InvalidGeneratorConfig` for zero waypoints, a non-positive radius or
/// negative noise.
pub fn generate_path(config: &GeneratorConfig) -> Result<Path> {
    #[cfg(feature = "profiling")]
    profiling::scope!("generate_path");

    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let waypoints = major_waypoints(&mut rng, config.major_waypoints);
    let intermediates = intermediate_counts(config, &waypoints);

    let total = waypoints.len() + intermediates.iter().sum::<usize>();
    let mut points = Vec::with_capacity(total);
    for (leg, &count) in waypoints.windows(2).zip(&intermediates) {
        let (from, to) = (leg[0], leg[1]);
        points.push(from);
        let steps = (count + 1) as f64;
        for j in 1..=count {
            let t = j as f64 / steps;
            let latitude = from.latitude + t * (to.latitude - from.latitude);
            let longitude = from.longitude + t * (to.longitude - from.longitude);
            points.push(jitter(&mut rng, latitude, longitude, config.noise_degrees));
        }
    }
    if let Some(&last) = waypoints.last() {
        points.push(last);
    }

    tracing::info!(
        "Generated {} sample points through {} major waypoints",
        points.len(),
        waypoints.len()
    );
    Ok(Path::new(points, config.radius))
}

/// Random start followed by a random walk of 1 to 5 degree steps
fn major_waypoints(rng: &mut StdRng, count: usize) -> Vec<Coordinate> {
    let mut latitude: f64 = rng.gen_range(-60.0..=60.0);
    let mut longitude: f64 = rng.gen_range(-170.0..=170.0);

    let mut waypoints = Vec::with_capacity(count);
    waypoints.push(Coordinate::new(latitude, longitude));
    for _ in 1..count {
        let step: f64 = rng.gen_range(1.0..=5.0);
        let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        latitude = (latitude + step * heading.cos()).clamp(-MAX_LATITUDE, MAX_LATITUDE);
        longitude = (longitude + step * heading.sin()).clamp(-MAX_LONGITUDE, MAX_LONGITUDE);
        waypoints.push(Coordinate::new(latitude, longitude));
    }
    waypoints
}

/// Number of interpolated points on each leg
fn intermediate_counts(config: &GeneratorConfig, waypoints: &[Coordinate]) -> Vec<usize> {
    let legs = waypoints.len().saturating_sub(1);

    let Some(total) = config.total_points else {
        return vec![config.points_per_segment.saturating_sub(1); legs];
    };

    if total < waypoints.len() {
        tracing::warn!(
            "Requested {} points but there are {} major waypoints, emitting waypoints only",
            total,
            waypoints.len()
        );
        return vec![0; legs];
    }
    if legs == 0 {
        if total > waypoints.len() {
            tracing::warn!("A single waypoint has no legs to fill, emitting 1 point");
        }
        return Vec::new();
    }

    let extra = total - waypoints.len();
    let lengths: Vec<f64> = waypoints
        .windows(2)
        .map(|leg| sphere::angular_distance(&leg[0], &leg[1]))
        .collect();
    let length_sum: f64 = lengths.iter().sum();

    // Degenerate walks (all legs clamped to one spot) share evenly
    let weights: Vec<f64> = if length_sum > 0.0 {
        lengths.iter().map(|l| l / length_sum).collect()
    } else {
        vec![1.0 / legs as f64; legs]
    };

    largest_remainder(extra, &weights)
}

/// Split `amount` into integer shares proportional to `weights` (which sum to 1)
fn largest_remainder(amount: usize, weights: &[f64]) -> Vec<usize> {
    let exact: Vec<f64> = weights.iter().map(|w| w * amount as f64).collect();
    let mut shares: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();

    let assigned: usize = shares.iter().sum();
    let mut leftover = amount.saturating_sub(assigned);

    let mut by_remainder: Vec<usize> = (0..weights.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });
    for index in by_remainder.into_iter().cycle() {
        if leftover == 0 {
            break;
        }
        shares[index] += 1;
        leftover -= 1;
    }
    shares
}

/// Uniform noise of `±noise/2` on both axes, clamped to valid ranges
#[inline]
fn jitter(rng: &mut StdRng, latitude: f64, longitude: f64, noise: f64) -> Coordinate {
    let lat_noise = rng.gen_range(-0.5..=0.5_f64) * noise;
    let lon_noise = rng.gen_range(-0.5..=0.5_f64) * noise;
    Coordinate::new(
        (latitude + lat_noise).clamp(-MAX_LATITUDE, MAX_LATITUDE),
        (longitude + lon_noise).clamp(-MAX_LONGITUDE, MAX_LONGITUDE),
    )
}
