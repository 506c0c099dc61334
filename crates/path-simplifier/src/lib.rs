//! Path Simplifier - Command line application library
//!
//! Wires the simplification library to its command-line surface: argument
//! parsing and validation ([`Settings`]), logging setup ([`setup_logging`]) and
//! the read / simplify / write pipeline ([`process`]).

mod logging;
mod process;
mod settings;

pub use logging::{LoggingGuard, setup_logging};
pub use process::{FILTERED_INPUT_FILE, InputSource, ProcessInput, output_file_name, process};
pub use settings::{Settings, SettingsError};

use path_simplifier_lib::{SimplificationReport, SimplifyError};

/// Any failure that ends the application with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Simplify(#[from] SimplifyError),
}

/// Validate the settings, run the pipeline and log a summary per algorithm
pub fn run(settings: Settings) -> Result<Vec<SimplificationReport>, AppError> {
    let input = settings.into_process_input()?;
    tracing::info!(
        "Simplifying with maximum deviation {} km using: {}",
        input.tolerance_km,
        input
            .kinds
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let reports = process(&input)?;
    for report in &reports {
        tracing::info!(
            "{}: kept {} of {} points ({:.1}% removed) in {:?}",
            report.kind,
            report.simplified_points,
            report.original_points,
            report.reduction_ratio() * 100.0,
            report.elapsed
        );
    }
    Ok(reports)
}
