//! Two-column CSV writer

use crate::{Path, Result};
use std::io::Write;
use std::path::PathBuf;

/// Write a path as `lat,lng` CSV into `output_dir/file_name`
///
/// Without an output directory the file is created relative to the current
/// working directory. Missing parent directories are created.
///
/// # Returns
/// The location of the written file
pub fn write_path(
    path: &Path,
    output_dir: Option<&std::path::Path>,
    file_name: &str,
) -> Result<PathBuf> {
    tracing::info!("Writing {} points to CSV {}", path.len(), file_name);

    let target = match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(&target)?;
    write_path_to_writer(path, std::io::BufWriter::new(file))?;

    tracing::info!("CSV written to {}", target.display());
    Ok(target)
}

/// Write a path as `lat,lng` CSV into any writer
pub fn write_path_to_writer<W: Write>(path: &Path, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["lat", "lng"])?;
    for point in path.points() {
        csv_writer.write_record([point.latitude.to_string(), point.longitude.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
