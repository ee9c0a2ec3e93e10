use std::path::PathBuf;

use turnout_sim::{Cell, Swing};

/// Demographic turnout simulator (states + DC)
#[derive(clap::Parser, Debug)]
#[command(name = "turnout-sim", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run a turnout scenario and write the state table
    Simulate(SimulateArgs),

    /// Print the embedded 2024 baseline
    Baseline(BaselineArgs),
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Race source table (ACS DP05 export); omitted means estimated white share
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub race: Option<PathBuf>,

    /// Education source table (ACS S1501 export); omitted means estimated college share
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub education: Option<PathBuf>,

    /// Scenario file (JSON); flags below override its fields
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub scenario: Option<PathBuf>,

    /// Max extra turnout as a fraction of baseline group turnout
    #[arg(long)]
    pub cap_factor: Option<f64>,

    /// Turnout meter for a group, e.g. --meter wc=0.5 (groups: wc, wnc, nwc, nwnc)
    #[arg(long = "meter", value_name = "GROUP=VALUE", value_parser = parse_meter)]
    pub meters: Vec<(Cell, f64)>,

    /// Party swing for a group in points, e.g. --swing wnc=-3,0.5 (R swing, Third swing)
    #[arg(long = "swing", value_name = "GROUP=R,T", value_parser = parse_swing)]
    pub swings: Vec<(Cell, Swing)>,

    /// Output state table (CSV), "-" for stdout; defaults to "./simulated_state_results.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Number of regions listed under top turnout changes
    #[arg(long, default_value_t = 12)]
    pub top: usize,

    /// Also list every region sorted by simulated margin, most Republican first
    #[arg(long)]
    pub by_margin: bool,
}

#[derive(clap::Args, Debug)]
pub struct BaselineArgs {
    /// Sort regions by margin instead of name
    #[arg(long)]
    pub by_margin: bool,
}

fn parse_cell(key: &str) -> Result<Cell, String> {
    Cell::from_key(key).ok_or_else(|| format!("unknown group '{key}' (expected wc, wnc, nwc or nwnc)"))
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.trim().parse::<f64>().map_err(|e| format!("invalid number '{raw}': {e}"))
}

fn parse_meter(raw: &str) -> Result<(Cell, f64), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected GROUP=VALUE, got '{raw}'"))?;
    Ok((parse_cell(key)?, parse_number(value)?))
}

fn parse_swing(raw: &str) -> Result<(Cell, Swing), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected GROUP=R,T, got '{raw}'"))?;
    let (republican, third) = match value.split_once(',') {
        Some((r, t)) => (parse_number(r)?, parse_number(t)?),
        None => (parse_number(value)?, 0.0),
    };
    Ok((parse_cell(key)?, Swing::new(republican, third)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_meter() {
        assert_eq!(parse_meter("nwc=0.75"), Ok((Cell::NonWhiteCollege, 0.75)));
        assert!(parse_meter("nwc").is_err());
        assert!(parse_meter("latino=0.2").is_err());
    }

    #[test]
    fn parses_swing_with_optional_third() {
        assert_eq!(parse_swing("wnc=-3,0.5"), Ok((Cell::WhiteNonCollege, Swing::new(-3.0, 0.5))));
        assert_eq!(parse_swing("wc=2"), Ok((Cell::WhiteCollege, Swing::new(2.0, 0.0))));
        assert!(parse_swing("wc=a,b").is_err());
    }

    #[test]
    fn cli_schema_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
