use std::collections::HashMap;
use std::path::Path;

use crate::io::csv_io::{self, CsvIoError, CsvTable};

/// Canonical name of the primary-key column after loading.
pub const KEY_COLUMN: &str = "id";

/// Source header naming the primary key in the uncertainties file.
pub const SOURCE_KEY_HEADER: &str = "ID";

/// Foreign-key column linking a requirement row to an uncertainty.
pub const FOREIGN_KEY_COLUMN: &str = "U_ID";

#[derive(Debug)]
pub enum DataLoadError {
    Csv(CsvIoError),
    MissingColumn(String),
}

impl std::fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::Csv(e) => write!(f, "data load failed: {e}"),
            DataLoadError::MissingColumn(name) => {
                write!(f, "data load failed: missing required column \"{name}\"")
            }
        }
    }
}

impl std::error::Error for DataLoadError {}

impl From<CsvIoError> for DataLoadError {
    fn from(e: CsvIoError) -> Self {
        DataLoadError::Csv(e)
    }
}

/// An immutable in-memory table: columns in source-header order, rows aligned
/// positionally with the columns, and an optional primary-key index for point
/// lookup. Row order is the source order and is the default display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    key_column: Option<String>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Builds a keyed dataset: the `source_key` header is renamed to the
    /// canonical `id`, rows with an empty key field are dropped, and the
    /// survivors are indexed by key (first occurrence wins on duplicates).
    pub fn keyed(table: CsvTable, source_key: &str) -> Result<Self, DataLoadError> {
        let key_pos = table
            .headers
            .iter()
            .position(|h| h == source_key)
            .ok_or_else(|| DataLoadError::MissingColumn(source_key.to_string()))?;

        let mut columns = table.headers;
        columns[key_pos] = KEY_COLUMN.to_string();

        let rows: Vec<Vec<String>> = table
            .rows
            .into_iter()
            .filter(|row| row.get(key_pos).is_some_and(|key| !key.is_empty()))
            .collect();

        let mut index = HashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            index.entry(row[key_pos].clone()).or_insert(pos);
        }

        Ok(Self {
            columns,
            rows,
            key_column: Some(KEY_COLUMN.to_string()),
            index,
        })
    }

    /// Builds an unkeyed dataset: all rows kept as parsed, no index.
    pub fn plain(table: CsvTable) -> Self {
        Self {
            columns: table.headers,
            rows: table.rows,
            key_column: None,
            index: HashMap::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn key_column(&self) -> Option<&str> {
        self.key_column.as_deref()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Point lookup by primary key. Always `None` on unkeyed datasets.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index.get(id).map(|pos| self.rows[*pos].as_slice())
    }

    /// Cell of `row` under the named column, by position in this dataset's
    /// header order.
    pub fn cell<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        self.column_index(column)
            .and_then(|pos| row.get(pos))
            .map(String::as_str)
    }

    /// A dataset with the same columns and key column but a different row
    /// sequence. The key index is rebuilt over the new rows.
    pub fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::new();
        if let Some(key_pos) = self.key_column.as_deref().and_then(|k| self.column_index(k)) {
            for (pos, row) in rows.iter().enumerate() {
                if let Some(key) = row.get(key_pos) {
                    index.entry(key.clone()).or_insert(pos);
                }
            }
        }
        Self {
            columns: self.columns.clone(),
            rows,
            key_column: self.key_column.clone(),
            index,
        }
    }
}

/// Both datasets, loaded once at startup and read-only for the life of the
/// process.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    uncertainties: Dataset,
    requirements: Dataset,
}

impl DatasetStore {
    pub fn load(
        uncertainties_path: &Path,
        requirements_path: &Path,
    ) -> Result<Self, DataLoadError> {
        let uncertainties =
            Dataset::keyed(csv_io::load_csv(uncertainties_path)?, SOURCE_KEY_HEADER)?;
        let requirements = Dataset::plain(csv_io::load_csv(requirements_path)?);
        Self::from_datasets(uncertainties, requirements)
    }

    /// Assembles a store from pre-built datasets, validating the requirements
    /// schema. Lets tests build stores without touching the filesystem.
    pub fn from_datasets(
        uncertainties: Dataset,
        requirements: Dataset,
    ) -> Result<Self, DataLoadError> {
        for required in [SOURCE_KEY_HEADER, FOREIGN_KEY_COLUMN] {
            if requirements.column_index(required).is_none() {
                return Err(DataLoadError::MissingColumn(required.to_string()));
            }
        }
        Ok(Self {
            uncertainties,
            requirements,
        })
    }

    pub fn uncertainties(&self) -> &Dataset {
        &self.uncertainties
    }

    pub fn requirements(&self) -> &Dataset {
        &self.requirements
    }
}
