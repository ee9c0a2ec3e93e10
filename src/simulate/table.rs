use anyhow::{Context, Result};
use polars::{frame::DataFrame, prelude::{Column, NamedFrom}, series::Series};

use crate::demographics::Cell;

use super::RegionResult;

/// Column order of the exported result table.
pub const RESULT_COLUMNS: [&str; 21] = [
    "state", "abbr", "R_sim", "D_sim", "T_sim", "total_sim_turnout", "margin_R_minus_D",
    "wc_turnout", "wnc_turnout", "nwc_turnout", "nwnc_turnout",
    "wc_extra", "wnc_extra", "nwc_extra", "nwnc_extra",
    "white_sh", "college_sh", "wc_sh", "wnc_sh", "nwc_sh", "nwnc_sh",
];

fn float_column(name: impl Into<String>, regions: &[RegionResult], f: impl Fn(&RegionResult) -> f64) -> Column {
    let name: String = name.into();
    Series::new(name.into(), regions.iter().map(f).collect::<Vec<f64>>()).into()
}

/// Build the one-row-per-region result table in [`RESULT_COLUMNS`] order.
pub(crate) fn result_dataframe(regions: &[RegionResult]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = vec![
        Series::new("state".into(), regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()).into(),
        Series::new("abbr".into(), regions.iter().map(|r| r.code.as_str()).collect::<Vec<_>>()).into(),
        float_column("R_sim", regions, |r| r.votes.republican),
        float_column("D_sim", regions, |r| r.votes.democrat),
        float_column("T_sim", regions, |r| r.votes.third),
        float_column("total_sim_turnout", regions, RegionResult::total_turnout),
        float_column("margin_R_minus_D", regions, RegionResult::margin),
    ];

    for cell in Cell::order() {
        columns.push(float_column(format!("{}_turnout", cell.to_str()), regions, |r| r.turnout[cell]));
    }
    for cell in Cell::order() {
        columns.push(float_column(format!("{}_extra", cell.to_str()), regions, |r| r.extra[cell]));
    }

    columns.push(float_column("white_sh", regions, |r| r.shares.white()));
    columns.push(float_column("college_sh", regions, |r| r.shares.college()));
    for cell in Cell::order() {
        columns.push(float_column(format!("{}_sh", cell.to_str()), regions, |r| r.shares.share(cell)));
    }

    DataFrame::new(columns).context("[simulate::table] Failed to build result table")
}
