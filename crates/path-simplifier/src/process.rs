//! The read / simplify / write pipeline behind the command line

use path_simplifier_lib::{
    GeneratorConfig, Path, Result, SimplificationReport, SimplifierKind, generate_path, io,
    simplify_all,
};
use std::path::PathBuf;

/// Name of the copy of the input path written next to the results
pub const FILTERED_INPUT_FILE: &str = "filtered_input.csv";

/// Where the input path comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// A CSV file with latitude and longitude columns
    File(PathBuf),
    /// A synthetic path
    Generate(GeneratorConfig),
}

/// Validated pipeline parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInput {
    pub source: InputSource,
    pub output_dir: Option<PathBuf>,
    pub tolerance_km: f64,
    /// Algorithms to run, without duplicates, in output order
    pub kinds: Vec<SimplifierKind>,
    pub radius: f64,
}

/// Output file name for the result of one algorithm
pub fn output_file_name(kind: SimplifierKind) -> String {
    format!("simplified_path_{}.csv", kind.name())
}

/// Run the whole pipeline and return one report per requested algorithm
///
/// Writes the input path as [`FILTERED_INPUT_FILE`] and every result as
/// `simplified_path_<algorithm>.csv` into the output directory.
pub fn process(input: &ProcessInput) -> Result<Vec<SimplificationReport>> {
    let path = load_path(input)?;
    let output_dir = input.output_dir.as_deref();

    io::write_path(&path, output_dir, FILTERED_INPUT_FILE)?;

    let results = simplify_all(&input.kinds, &path, input.tolerance_km)?;

    let mut reports = Vec::with_capacity(results.len());
    for (simplified, report) in results {
        io::write_path(&simplified, output_dir, &output_file_name(report.kind))?;
        reports.push(report);
    }
    Ok(reports)
}

fn load_path(input: &ProcessInput) -> Result<Path> {
    match &input.source {
        InputSource::File(file) => io::read_path(file, input.radius),
        InputSource::Generate(config) => generate_path(config),
    }
}
