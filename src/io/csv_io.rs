use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;

/// A parsed delimited file: the header record plus every data record, with
/// each row padded or truncated to the header width so cells align with
/// column positions.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug)]
pub enum CsvIoError {
    Io(io::Error),
    Parse(csv::Error),
    MissingHeader,
}

impl std::fmt::Display for CsvIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvIoError::Io(e) => write!(f, "IO error: {e}"),
            CsvIoError::Parse(e) => write!(f, "CSV parse error: {e}"),
            CsvIoError::MissingHeader => write!(f, "CSV source has no header row"),
        }
    }
}

impl std::error::Error for CsvIoError {}

impl From<io::Error> for CsvIoError {
    fn from(e: io::Error) -> Self {
        CsvIoError::Io(e)
    }
}

impl From<csv::Error> for CsvIoError {
    fn from(e: csv::Error) -> Self {
        CsvIoError::Parse(e)
    }
}

/// Loads a CSV file whose first record names the columns. Records shorter
/// than the header are padded with empty fields, longer ones truncated, so
/// every row lines up with the headers. All-empty records are kept; dropping
/// rows is the dataset layer's concern, not the parser's.
pub fn load_csv(path: &Path) -> Result<CsvTable, CsvIoError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CsvIoError::MissingHeader);
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}
