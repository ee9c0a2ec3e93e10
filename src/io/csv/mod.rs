mod read;
mod write;

pub(crate) use read::read_csv_as_strings;
pub(crate) use write::{write_csv, write_csv_string};
