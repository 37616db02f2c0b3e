//! CSV dataset source.
//!
//! The sales export is Latin-1 (ISO-8859-1) encoded, so records are read
//! as raw bytes and every byte is mapped to the code point of the same
//! value.

use std::fs;
use std::path::{Path, PathBuf};

use data_spi::{DataError, Dataset, DatasetSource, Result};

/// Dataset source backed by a Latin-1 CSV file.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvDatasetSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Dataset> {
        load_latin1_csv(&self.path)
    }
}

/// Read a Latin-1 CSV file with a header row.
pub fn load_latin1_csv(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path).map_err(|e| DataError::read_failed(path.display(), e))?;
    let dataset = parse_latin1_csv(&bytes, path)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse Latin-1 CSV bytes. Records may have differing lengths.
pub fn parse_latin1_csv(bytes: &[u8], source: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?
        .iter()
        .map(decode_latin1)
        .collect();
    if headers.is_empty() {
        return Err(DataError::MissingHeader(source.display().to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| DataError::ParseError(e.to_string()))?;
        rows.push(record.iter().map(decode_latin1).collect());
    }

    Ok(Dataset::new(source, headers, rows))
}

/// Decode ISO-8859-1 bytes; each byte is one code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_latin1_high_bytes() {
        assert_eq!(decode_latin1(b"Caf\xe9"), "Café");
        assert_eq!(decode_latin1(b"\xc1lvarez"), "Álvarez");
        assert_eq!(decode_latin1(b"plain"), "plain");
    }

    #[test]
    fn test_parse_with_latin1_cells() {
        let bytes = b"Row ID,Customer Name,City\n1,Jos\xe9 Gonz\xe1lez,Henderson\n2,Claire Gute,Henderson\n";
        let data = parse_latin1_csv(bytes, Path::new("mem.csv")).unwrap();
        assert_eq!(data.headers, vec!["Row ID", "Customer Name", "City"]);
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.cell(0, 1), "José González");
    }

    #[test]
    fn test_parse_quoted_commas() {
        let bytes = b"Product Name,Sales\n\"Bretford CR4500 Series Slim Rectangular Table, 60\"\"\",957.5775\n";
        let data = parse_latin1_csv(bytes, Path::new("mem.csv")).unwrap();
        assert_eq!(data.cell(0, 0), "Bretford CR4500 Series Slim Rectangular Table, 60\"");
        assert_eq!(data.cell(0, 1), "957.5775");
    }

    #[test]
    fn test_parse_flexible_records() {
        let bytes = b"a,b,c\n1,2\n3,4,5\n";
        let data = parse_latin1_csv(bytes, Path::new("mem.csv")).unwrap();
        assert_eq!(data.rows[0].len(), 2);
        assert_eq!(data.cell(0, 2), "");
        assert_eq!(data.cell(1, 2), "5");
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = parse_latin1_csv(b"", Path::new("empty.csv")).unwrap_err();
        assert!(matches!(err, DataError::MissingHeader(ref p) if p == "empty.csv"));
    }

    #[test]
    fn test_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Region,Sales\nSouth,261.96\nWest,14.62\n").unwrap();

        let source = CsvDatasetSource::new(file.path());
        let data = source.load().unwrap();
        assert_eq!(source.name(), "csv");
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.source, file.path());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_latin1_csv(Path::new("/nonexistent/Superstore.csv")).unwrap_err();
        assert!(matches!(err, DataError::ReadFailed { .. }));
    }
}
