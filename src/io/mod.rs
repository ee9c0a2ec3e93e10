mod columns;
mod csv;
mod source;

pub use columns::{ColumnResolver, KeywordMatch};
pub(crate) use csv::{write_csv, write_csv_string};
pub use source::{EducationColumns, RaceColumns, SourceError, SourceTable};
pub use source::{education_shares, race_shares, read_education_source, read_race_source};
