//! CSV reading operations.

use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

use crate::io::SourceError;

/// Reads a CSV file with a header row, keeping every column as a string.
/// Numeric parsing is left to the caller so that thousands separators and
/// footnote markers in census exports do not break schema inference.
pub(crate) fn read_csv_as_strings(path: &Path) -> Result<DataFrame, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()?;
    Ok(df)
}
