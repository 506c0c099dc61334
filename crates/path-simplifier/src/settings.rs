use crate::process::{InputSource, ProcessInput};
use clap::Parser;
use path_simplifier_lib::{EARTH_RADIUS_KM, GeneratorConfig, SimplifierKind};
use std::path::PathBuf;

/// Argument combinations clap cannot reject on its own
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SettingsError {
    #[error("Either --file or --generate must be provided")]
    MissingInput,

    #[error("Only one of --file or --generate can be provided")]
    ConflictingInputs,

    #[error("Maximum deviation must be a non-negative number of kilometers, got {0}")]
    InvalidDeviation(f64),

    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("At least one algorithm must be selected")]
    NoAlgorithms,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Path Simplifier - Reduces flight and GPS paths to fewer points within a maximum deviation
pub struct Settings {
    /// CSV file with latitude and longitude columns
    #[clap(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory for the output CSV files (default: current directory)
    #[clap(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Generate a sample path: number of major waypoints, then optionally the total point count
    #[clap(short, long, num_args = 1..=2, value_names = ["MAJOR", "TOTAL"])]
    pub generate: Option<Vec<usize>>,

    /// Maximum deviation from the original path in kilometers
    #[clap(short, long, value_name = "KM", allow_negative_numbers = true)]
    pub deviation: f64,

    /// Comma separated list of algorithms to run
    #[clap(
        short,
        long,
        value_delimiter = ',',
        default_values_t = SimplifierKind::ALL.to_vec()
    )]
    pub algorithms: Vec<SimplifierKind>,

    /// Sphere radius in kilometers
    #[clap(long, value_name = "KM", default_value_t = EARTH_RADIUS_KM, allow_negative_numbers = true)]
    pub radius: f64,

    /// Seed for the sample path generator
    #[clap(long)]
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse the process arguments, exiting with clap's usage message on failure
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Check the combinations clap accepted and build the pipeline input
    pub fn into_process_input(self) -> Result<ProcessInput, SettingsError> {
        if self.deviation.is_nan() || self.deviation < 0.0 {
            return Err(SettingsError::InvalidDeviation(self.deviation));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SettingsError::InvalidRadius(self.radius));
        }

        let source = match (self.file, self.generate) {
            (Some(_), Some(_)) => return Err(SettingsError::ConflictingInputs),
            (None, None) => return Err(SettingsError::MissingInput),
            (Some(file), None) => InputSource::File(file),
            (None, Some(counts)) => {
                let mut config = GeneratorConfig {
                    radius: self.radius,
                    seed: self.seed,
                    ..GeneratorConfig::new(counts[0])
                };
                config.total_points = counts.get(1).copied();
                InputSource::Generate(config)
            }
        };

        // Duplicates would write the same output file twice
        let mut kinds: Vec<SimplifierKind> = Vec::with_capacity(self.algorithms.len());
        for kind in self.algorithms {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            return Err(SettingsError::NoAlgorithms);
        }

        Ok(ProcessInput {
            source,
            output_dir: self.output_dir,
            tolerance_km: self.deviation,
            kinds,
            radius: self.radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        Settings::try_parse_from(std::iter::once("path-simplifier").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_file_input_with_defaults() {
        let input = parse(&["-f", "flight.csv", "-d", "0.5"])
            .into_process_input()
            .unwrap();
        assert_eq!(input.source, InputSource::File(PathBuf::from("flight.csv")));
        assert_eq!(input.tolerance_km, 0.5);
        assert_eq!(input.kinds, SimplifierKind::ALL.to_vec());
        assert_eq!(input.radius, EARTH_RADIUS_KM);
        assert_eq!(input.output_dir, None);
    }

    #[test]
    fn test_generate_with_total_and_seed() {
        let input = parse(&["-g", "5", "1000", "-d", "1", "--seed", "7", "-o", "out"])
            .into_process_input()
            .unwrap();
        match input.source {
            InputSource::Generate(config) => {
                assert_eq!(config.major_waypoints, 5);
                assert_eq!(config.total_points, Some(1000));
                assert_eq!(config.seed, Some(7));
            }
            other => panic!("unexpected source: {other:?}"),
        }
        assert_eq!(input.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_generate_major_only() {
        let input = parse(&["--generate", "3", "-d", "1"])
            .into_process_input()
            .unwrap();
        assert!(matches!(
            input.source,
            InputSource::Generate(GeneratorConfig { major_waypoints: 3, total_points: None, .. })
        ));
    }

    #[test]
    fn test_algorithm_list_and_aliases() {
        let input = parse(&["-f", "a.csv", "-d", "1", "-a", "greedy,dp,greedy"])
            .into_process_input()
            .unwrap();
        assert_eq!(
            input.kinds,
            vec![SimplifierKind::Greedy, SimplifierKind::DouglasPeucker]
        );
    }

    #[test]
    fn test_unknown_algorithm_rejected_by_parser() {
        let result = Settings::try_parse_from(["path-simplifier", "-f", "a.csv", "-d", "1", "-a", "foo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_deviation_is_required() {
        let result = Settings::try_parse_from(["path-simplifier", "-f", "a.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_source_validation() {
        let both = parse(&["-f", "a.csv", "-g", "3", "-d", "1"]).into_process_input();
        assert_eq!(both.unwrap_err(), SettingsError::ConflictingInputs);

        let neither = parse(&["-d", "1"]).into_process_input();
        assert_eq!(neither.unwrap_err(), SettingsError::MissingInput);
    }

    #[test]
    fn test_negative_deviation_rejected() {
        let result = parse(&["-f", "a.csv", "-d", "-1"]).into_process_input();
        assert_eq!(result.unwrap_err(), SettingsError::InvalidDeviation(-1.0));
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let result = parse(&["-f", "a.csv", "-d", "1", "--radius", "0"]).into_process_input();
        assert_eq!(result.unwrap_err(), SettingsError::InvalidRadius(0.0));
    }
}
