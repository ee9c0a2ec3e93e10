//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};

/// Write a result table to a CSV file, replacing any existing file.
pub(crate) fn write_csv(table: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write_csv] cannot create result table {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(table)
        .with_context(|| format!("[io::csv::write_csv] failed writing {} rows to {}", table.height(), path.display()))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(table: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::with_capacity(table.height() * 256);
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(table)
        .context("[io::csv::write_csv_string] failed rendering result table")?;
    String::from_utf8(buffer).context("[io::csv::write_csv_string] result table is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, NamedFrom, Series};

    use super::*;

    fn table() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("state".into(), vec!["Ohio", "Iowa"]).into(),
            Series::new("R_sim".into(), vec![1.5, 2.0]).into(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = write_csv_string(&mut table()).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "state,R_sim");
        assert_eq!(lines[1], "Ohio,1.5");
        assert!(lines[2].starts_with("Iowa,2"));
    }

    #[test]
    fn unwritable_path_names_the_result_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_csv(&mut table(), &path).unwrap_err();
        assert!(err.to_string().contains("cannot create result table"));
    }
}
