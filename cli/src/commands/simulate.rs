use std::{io::Write, path::Path};

use anyhow::{Result, bail};
use tracing::info;
use turnout_sim::{Baseline, Cell, MarginalTable, Party, Scenario, Simulation, SimulationResult, SourceStatus};

use crate::cli::{Cli, SimulateArgs};
use super::{fmt_delta, fmt_votes};

pub fn run(_cli: &Cli, args: &SimulateArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| "./simulated_state_results.csv".into());
    let to_stdout = out_path == Path::new("-");

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::read_json(path)?,
        None => Scenario::default(),
    };
    if let Some(cap_factor) = args.cap_factor {
        scenario = scenario.with_cap_factor(cap_factor);
    }
    for &(cell, meter) in &args.meters {
        scenario = scenario.with_meter(cell, meter);
    }
    for &(cell, swing) in &args.swings {
        scenario = scenario.with_swing(cell, swing);
    }

    let baseline = Baseline::election_2024()?;
    let marginals = MarginalTable::load(args.race.as_deref(), args.education.as_deref(), &baseline);

    info!(regions = baseline.len(), cap_factor = scenario.cap_factor, "running simulation");
    let result = Simulation::new(baseline, &marginals).run(&scenario);

    if to_stdout {
        print!("{}", result.to_csv_string()?);
        report(&mut std::io::stderr(), &result, args)?;
    } else {
        report(&mut std::io::stdout(), &result, args)?;
        if out_path.is_dir() { bail!("[simulate] output path is a directory: {}", out_path.display()) }
        result.write_csv(&out_path)?;
        println!("[simulate] wrote state table to {}", out_path.display());
    }

    Ok(())
}

fn status_label(status: &SourceStatus) -> String {
    match status {
        SourceStatus::Loaded => "loaded".into(),
        SourceStatus::Estimated { reason } => format!("estimated ({reason})"),
    }
}

/// Print source status, national totals and the largest turnout changes.
fn report(out: &mut impl Write, result: &SimulationResult, args: &SimulateArgs) -> Result<()> {
    writeln!(out, "Sources: race {}, education {}",
        status_label(&result.race_status), status_label(&result.education_status))?;

    let national = &result.national;
    let delta = national.delta();
    writeln!(out)?;
    writeln!(out, "National totals")?;
    writeln!(out, "  Total votes  {:>14}", fmt_votes(national.total()))?;
    writeln!(out, "  R votes      {:>14}  {} vs 2024 baseline", fmt_votes(national.votes.republican), fmt_delta(delta.republican))?;
    writeln!(out, "  D votes      {:>14}  {} vs 2024 baseline", fmt_votes(national.votes.democrat), fmt_delta(delta.democrat))?;
    writeln!(out, "  Third votes  {:>14}  {} vs 2024 baseline", fmt_votes(national.votes.third), fmt_delta(delta.third))?;
    writeln!(out, "  Margin R-D   {:>14}  winner {}", fmt_delta(national.margin()), national.winner().to_str())?;
    writeln!(out, "  States won   R {}  D {}",
        result.regions_won(Party::Republican), result.regions_won(Party::Democrat))?;

    writeln!(out)?;
    writeln!(out, "Group turnout")?;
    for cell in Cell::order() {
        let shares = result.party_shares[cell];
        writeln!(out, "  {:<22} {:>14}  R {:.3} D {:.3} T {:.3}",
            cell.label(), fmt_votes(result.cell_turnout(cell)), shares.republican, shares.democrat, shares.third)?;
    }

    if args.top > 0 {
        writeln!(out)?;
        writeln!(out, "Top turnout changes")?;
        for region in result.top_turnout_changes(args.top) {
            writeln!(out, "  {:<22} {:>12} {:>12}  margin {:>+7.2} pp",
                region.name, fmt_votes(region.total_turnout()), fmt_delta(region.turnout_change()), region.margin_pct())?;
        }
    }

    if args.by_margin {
        writeln!(out)?;
        writeln!(out, "Regions by margin")?;
        for region in result.by_margin() {
            writeln!(out, "  {:<4} {:>12} {:>+7.2} pp  {}",
                region.code, fmt_delta(region.margin()), region.margin_pct(), region.winner().to_str())?;
        }
    }
    Ok(())
}
