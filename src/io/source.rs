//! Demographic source tables: race (ACS DP05 style) and education (ACS S1501 style).

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use polars::{error::PolarsError, frame::DataFrame};
use thiserror::Error;

use crate::{io::{ColumnResolver, KeywordMatch, csv::read_csv_as_strings}, region::Baseline};

/// Why a demographic source could not be used.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Source has no rows for known regions")]
    NoRegions,
}

/// A source table reduced to region rows and numeric columns.
///
/// `GEO_ID` and the region-name column are never candidates for numeric
/// columns. When the first data row is a label row (census exports carry
/// column codes in the header and labels in the first row), the labels are
/// used as headers.
#[derive(Debug, Clone)]
pub struct SourceTable {
    names: Vec<String>,
    headers: Vec<String>,
    values: Vec<Vec<Option<f64>>>, // values[column][row]
}

impl SourceTable {
    /// Build directly from parts (used by tests and in-memory providers).
    pub fn new(names: Vec<String>, headers: Vec<String>, values: Vec<Vec<Option<f64>>>) -> Self {
        assert_eq!(headers.len(), values.len(), "SourceTable::new: one value column per header");
        assert!(values.iter().all(|column| column.len() == names.len()),
            "SourceTable::new: every column must have one value per row");
        Self { names, headers, values }
    }

    /// Reduce a string-typed DataFrame to the rows naming a region in `baseline`.
    pub fn from_dataframe(df: &DataFrame, baseline: &Baseline) -> Result<Self, SourceError> {
        let columns = df.get_columns();
        if columns.is_empty() { return Err(SourceError::MissingColumn("NAME".into())) }
        let column_names = columns.iter().map(|c| c.name().to_string()).collect::<Vec<_>>();

        let name_idx = column_names.iter()
            .position(|name| name.eq_ignore_ascii_case("name"))
            .unwrap_or(0);

        let raw = columns.iter()
            .map(|column| -> Result<Vec<Option<String>>, SourceError> {
                Ok(column.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
            })
            .collect::<Result<Vec<Vec<Option<String>>>, SourceError>>()?;

        // Census exports repeat the header as human-readable labels in the first row.
        let has_label_row = raw.get(name_idx)
            .and_then(|names| names.first())
            .and_then(|first| first.as_deref())
            .is_some_and(|first| first.trim().eq_ignore_ascii_case("geographic area name"));
        let skip = usize::from(has_label_row);

        let rows = raw[name_idx].iter().enumerate()
            .skip(skip)
            .filter_map(|(i, name)| {
                let name = name.as_deref()?.trim();
                baseline.contains(name).then(|| (i, name.to_string()))
            })
            .collect::<Vec<_>>();

        let mut headers = Vec::new();
        let mut values = Vec::new();
        for (j, column_name) in column_names.iter().enumerate() {
            if j == name_idx || column_name.eq_ignore_ascii_case("geo_id") { continue }

            let header = match has_label_row {
                true => raw[j][0].clone().unwrap_or_else(|| column_name.clone()),
                false => column_name.clone(),
            };
            headers.push(header);
            values.push(rows.iter().map(|&(i, _)| raw[j][i].as_deref().and_then(parse_number)).collect());
        }

        let names = rows.into_iter().map(|(_, name)| name).collect();
        Ok(Self { names, headers, values })
    }

    /// Number of region rows.
    #[inline] pub fn len(&self) -> usize { self.names.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }

    #[inline] pub fn headers(&self) -> &[String] { &self.headers }

    #[inline] pub fn names(&self) -> &[String] { &self.names }

    /// Locate a numeric column with `resolver`.
    pub fn locate(&self, resolver: &dyn ColumnResolver) -> Option<usize> {
        resolver.resolve(&self.headers).filter(|&j| j < self.values.len())
    }

    #[inline]
    fn value(&self, column: usize, row: usize) -> Option<f64> {
        self.values[column][row]
    }
}

/// Parse a census-style number, ignoring thousands separators, percent signs and whitespace.
/// Markers such as "N" or "(X)" yield `None`.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|&c| !matches!(c, ',' | '%') && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column resolvers for the race source.
pub struct RaceColumns {
    pub total: Box<dyn ColumnResolver>,
    pub white_not_hispanic: Box<dyn ColumnResolver>,
    pub white_alone: Box<dyn ColumnResolver>,
}

impl Default for RaceColumns {
    fn default() -> Self {
        Self {
            total: Box::new(KeywordMatch::new().any_of(&["total population", "total"])),
            white_not_hispanic: Box::new(KeywordMatch::new()
                .any_of(&["white alone, not hispanic", "white alone not hispanic", "not hispanic or latino"])
                .containing("white")),
            white_alone: Box::new(KeywordMatch::new().containing("white alone")),
        }
    }
}

/// Column resolvers for the education source.
pub struct EducationColumns {
    pub bachelors_or_higher: Box<dyn ColumnResolver>,
    pub bachelors_only: Box<dyn ColumnResolver>,
    pub graduate: Box<dyn ColumnResolver>,
}

const PERCENT: &[&str] = &["percent", "pct"];

impl Default for EducationColumns {
    fn default() -> Self {
        Self {
            bachelors_or_higher: Box::new(KeywordMatch::new().containing("bachelor").any_of(PERCENT).containing("higher")),
            bachelors_only: Box::new(KeywordMatch::new().containing("bachelor").any_of(PERCENT).excluding("higher")),
            graduate: Box::new(KeywordMatch::new().any_of(&["graduate", "professional"]).any_of(PERCENT)),
        }
    }
}

/// White (not Hispanic) share of total population per region.
///
/// Rows without a positive total are skipped. The white-alone column stands in
/// when the not-Hispanic value is absent; no Hispanic adjustment is applied.
pub fn race_shares(table: &SourceTable, columns: &RaceColumns) -> Result<AHashMap<String, f64>, SourceError> {
    if table.is_empty() { return Err(SourceError::NoRegions) }

    let total = table.locate(columns.total.as_ref())
        .ok_or_else(|| SourceError::MissingColumn("total population".into()))?;
    let white_nh = table.locate(columns.white_not_hispanic.as_ref());
    let white_alone = table.locate(columns.white_alone.as_ref());
    if white_nh.is_none() && white_alone.is_none() {
        return Err(SourceError::MissingColumn("white alone, not hispanic".into()));
    }

    let shares = table.names().iter().enumerate()
        .filter_map(|(row, name)| {
            let total = table.value(total, row).filter(|&t| t > 0.0)?;
            let white = white_nh.and_then(|j| table.value(j, row))
                .or_else(|| white_alone.and_then(|j| table.value(j, row)))
                .filter(|&w| w >= 0.0)?;
            Some((name.clone(), (white / total).clamp(0.0, 1.0)))
        })
        .collect();
    non_empty(shares)
}

/// Bachelor's-or-higher share of the 25+ population per region.
///
/// Uses a combined bachelor's-or-higher percentage when present, otherwise
/// bachelor's plus graduate/professional percentages (missing cells count as
/// zero). Values above 1 are percentages and are divided by 100.
pub fn education_shares(table: &SourceTable, columns: &EducationColumns) -> Result<AHashMap<String, f64>, SourceError> {
    if table.is_empty() { return Err(SourceError::NoRegions) }

    let as_fraction = |v: f64| if v > 1.0 { v / 100.0 } else { v };

    if let Some(col) = table.locate(columns.bachelors_or_higher.as_ref()) {
        let shares = table.names().iter().enumerate()
            .filter_map(|(row, name)| table.value(col, row).map(|v| (name.clone(), as_fraction(v))))
            .collect();
        return non_empty(shares);
    }

    match (table.locate(columns.bachelors_only.as_ref()), table.locate(columns.graduate.as_ref())) {
        (Some(bachelors), Some(graduate)) => {
            let shares = table.names().iter().enumerate()
                .map(|(row, name)| {
                    let b = table.value(bachelors, row).unwrap_or(0.0);
                    let g = table.value(graduate, row).unwrap_or(0.0);
                    (name.clone(), as_fraction(b + g))
                })
                .collect();
            Ok(shares)
        }
        _ => Err(SourceError::MissingColumn("bachelor's degree or higher (percent)".into())),
    }
}

/// Columns were found but no row yielded a value: the source is as unusable as one without regions.
fn non_empty(shares: AHashMap<String, f64>) -> Result<AHashMap<String, f64>, SourceError> {
    if shares.is_empty() { Err(SourceError::NoRegions) } else { Ok(shares) }
}

/// Read the race source at `path` and compute white shares for regions in `baseline`.
pub fn read_race_source(path: &Path, baseline: &Baseline) -> Result<AHashMap<String, f64>, SourceError> {
    let df = read_csv_as_strings(path)?;
    race_shares(&SourceTable::from_dataframe(&df, baseline)?, &RaceColumns::default())
}

/// Read the education source at `path` and compute college shares for regions in `baseline`.
pub fn read_education_source(path: &Path, baseline: &Baseline) -> Result<AHashMap<String, f64>, SourceError> {
    let df = read_csv_as_strings(path)?;
    education_shares(&SourceTable::from_dataframe(&df, baseline)?, &EducationColumns::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[(&str, &[Option<f64>])]) -> SourceTable {
        let names = rows.iter().map(|(name, _)| name.to_string()).collect();
        let values = (0..headers.len())
            .map(|j| rows.iter().map(|(_, row)| row[j]).collect())
            .collect();
        SourceTable::new(names, headers.iter().map(|h| h.to_string()).collect(), values)
    }

    #[test]
    fn parses_census_numbers() {
        assert_eq!(parse_number("1,462,616"), Some(1462616.0));
        assert_eq!(parse_number(" 34.2% "), Some(34.2));
        assert_eq!(parse_number("(X)"), None);
        assert_eq!(parse_number("N"), None);
    }

    #[test]
    fn race_prefers_not_hispanic_column() {
        let table = table(
            &["Total population", "White alone", "White alone, not Hispanic or Latino"],
            &[
                ("Ohio", &[Some(1000.0), Some(800.0), Some(750.0)]),
                ("Texas", &[Some(1000.0), Some(700.0), None]),
                ("Maine", &[Some(0.0), Some(900.0), Some(900.0)]),
            ],
        );
        let shares = race_shares(&table, &RaceColumns::default()).unwrap();
        assert_eq!(shares["Ohio"], 0.75);
        assert_eq!(shares["Texas"], 0.7);
        assert!(!shares.contains_key("Maine"));
    }

    #[test]
    fn race_requires_total_and_white_columns() {
        let no_white = table(&["Total population"], &[("Ohio", &[Some(10.0)])]);
        assert!(matches!(race_shares(&no_white, &RaceColumns::default()), Err(SourceError::MissingColumn(_))));

        let no_total = table(&["White alone"], &[("Ohio", &[Some(10.0)])]);
        assert!(matches!(race_shares(&no_total, &RaceColumns::default()), Err(SourceError::MissingColumn(_))));
    }

    #[test]
    fn education_converts_percentages() {
        let table = table(
            &["Percent Bachelor's degree or higher"],
            &[("Ohio", &[Some(31.5)]), ("Utah", &[Some(0.38)]), ("Iowa", &[None])],
        );
        let shares = education_shares(&table, &EducationColumns::default()).unwrap();
        assert!((shares["Ohio"] - 0.315).abs() < 1e-12);
        assert_eq!(shares["Utah"], 0.38);
        assert!(!shares.contains_key("Iowa"));
    }

    #[test]
    fn education_sums_bachelors_and_graduate() {
        let table = table(
            &["Percent Bachelor's degree", "Percent Graduate or professional degree"],
            &[("Ohio", &[Some(20.0), Some(12.0)]), ("Iowa", &[Some(22.0), None])],
        );
        let shares = education_shares(&table, &EducationColumns::default()).unwrap();
        assert!((shares["Ohio"] - 0.32).abs() < 1e-12);
        assert!((shares["Iowa"] - 0.22).abs() < 1e-12);
    }

    #[test]
    fn education_without_columns_is_an_error() {
        let table = table(&["Median earnings"], &[("Ohio", &[Some(50000.0)])]);
        assert!(matches!(education_shares(&table, &EducationColumns::default()), Err(SourceError::MissingColumn(_))));
    }

    #[test]
    fn empty_table_is_an_error() {
        let table = table(&["Total population"], &[]);
        assert!(matches!(race_shares(&table, &RaceColumns::default()), Err(SourceError::NoRegions)));
    }

    #[test]
    fn suppressed_values_everywhere_is_an_error() {
        let race = table(
            &["Total population", "White alone"],
            &[("Ohio", &[None, None]), ("Iowa", &[Some(0.0), Some(10.0)])],
        );
        assert!(matches!(race_shares(&race, &RaceColumns::default()), Err(SourceError::NoRegions)));

        let education = table(&["Percent Bachelor's degree or higher"], &[("Ohio", &[None])]);
        assert!(matches!(education_shares(&education, &EducationColumns::default()), Err(SourceError::NoRegions)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let baseline = Baseline::election_2024().unwrap();
        let err = read_race_source(Path::new("/definitely/not/here.csv"), &baseline).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }
}
