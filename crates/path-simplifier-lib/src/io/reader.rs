//! Header-detecting CSV reader

use crate::{Coordinate, Path, Result, SimplifyError};
use std::io::Read;

/// Read a path from a CSV file
///
/// Rows with missing, non-numeric or out-of-range coordinates are skipped with a
/// warning. A missing latitude or longitude header is an error.
///
/// # Arguments
/// * `file` - CSV file with a header row
/// * `radius` - Sphere radius to attach to the resulting path
pub fn read_path<P: AsRef<std::path::Path>>(file: P, radius: f64) -> Result<Path> {
    let file = file.as_ref();
    tracing::info!("Reading path from file: {}", file.display());

    let reader = std::io::BufReader::new(std::fs::File::open(file)?);
    read_path_from_reader(reader, radius)
}

/// Read a path from any CSV source (see [`read_path`])
pub fn read_path_from_reader<R: Read>(reader: R, radius: f64) -> Result<Path> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let (lat_index, lon_index) = find_columns(&headers)?;
    tracing::info!(
        "Column headers associated with latitude: '{}', longitude: '{}'",
        headers[lat_index],
        headers[lon_index]
    );

    let mut points = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        // Header is line 1
        let line = row + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping unreadable row at line {}: {}", line, e);
                continue;
            }
        };

        match parse_coordinate(record.get(lat_index), record.get(lon_index)) {
            Some(coordinate) => {
                tracing::trace!("Parsed point: {:?}", coordinate);
                points.push(coordinate);
            }
            None => tracing::warn!("Skipping row with invalid coordinates at line {}: {:?}", line, record),
        }
    }

    tracing::info!("Successfully parsed {} points", points.len());
    Ok(Path::new(points, radius))
}

/// Locate the latitude and longitude columns from the header row
fn find_columns(headers: &[String]) -> Result<(usize, usize)> {
    let lowercase: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let lat_index = lowercase.iter().position(|h| h.contains("lat"));
    let lon_index = lowercase
        .iter()
        .position(|h| h.contains("lon") || h.contains("lng"));

    match (lat_index, lon_index) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        (None, _) => Err(SimplifyError::MissingColumn {
            column: "latitude",
            headers: headers.to_vec(),
        }),
        (_, None) => Err(SimplifyError::MissingColumn {
            column: "longitude",
            headers: headers.to_vec(),
        }),
    }
}

/// Parse a pair of fields into a valid coordinate
fn parse_coordinate(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coordinate> {
    let latitude = latitude?.parse::<f64>().ok()?;
    let longitude = longitude?.parse::<f64>().ok()?;
    Coordinate::try_new(latitude, longitude).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EARTH_RADIUS_KM;

    fn read(csv: &str) -> Result<Path> {
        read_path_from_reader(csv.as_bytes(), EARTH_RADIUS_KM)
    }

    #[test]
    fn test_reads_simple_file() {
        let path = read("lat,lng\n1.0,2.0\n3.5,-4.25\n").unwrap();
        assert_eq!(
            path.points(),
            &[Coordinate::new(1.0, 2.0), Coordinate::new(3.5, -4.25)]
        );
        assert_eq!(path.radius(), EARTH_RADIUS_KM);
    }

    #[test]
    fn test_detects_columns_by_substring() {
        let path = read("Timestamp, Longitude , Latitude,Altitude\n0,10.0,20.0,1000\n").unwrap();
        assert_eq!(path.points(), &[Coordinate::new(20.0, 10.0)]);
    }

    #[test]
    fn test_lon_and_lng_both_accepted() {
        let path = read("LAT,LON\n5,6\n").unwrap();
        assert_eq!(path.points(), &[Coordinate::new(5.0, 6.0)]);
    }

    #[test]
    fn test_skips_invalid_rows() {
        let csv = "lat,lng\n1,1\nabc,2\n95,0\n0,181\n2,\n3\n4,4\n";
        let path = read(csv).unwrap();
        assert_eq!(
            path.points(),
            &[Coordinate::new(1.0, 1.0), Coordinate::new(4.0, 4.0)]
        );
    }

    #[test]
    fn test_missing_latitude_column() {
        let result = read("x,lng\n1,2\n");
        assert!(matches!(
            result,
            Err(SimplifyError::MissingColumn { column: "latitude", .. })
        ));
    }

    #[test]
    fn test_missing_longitude_column() {
        let result = read("lat,y\n1,2\n");
        assert!(matches!(
            result,
            Err(SimplifyError::MissingColumn { column: "longitude", .. })
        ));
    }

    #[test]
    fn test_header_only_gives_empty_path() {
        let path = read("lat,lng\n").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_path("/definitely/not/here.csv", EARTH_RADIUS_KM);
        assert!(matches!(result, Err(SimplifyError::Io(_))));
    }
}
