use anyhow::Result;
use turnout_sim::Baseline;

use crate::cli::{BaselineArgs, Cli};
use super::{fmt_delta, fmt_votes};

pub fn run(_cli: &Cli, args: &BaselineArgs) -> Result<()> {
    let baseline = Baseline::election_2024()?;

    let mut regions = baseline.regions().iter().collect::<Vec<_>>();
    if args.by_margin {
        regions.sort_by(|a, b| b.votes().margin().total_cmp(&a.votes().margin()));
    }

    println!("{:<22} {:<4} {:>12} {:>12} {:>10} {:>12} {:>12} {:>6}", "state", "abbr", "R", "D", "T", "total", "margin", "winner");
    for region in regions {
        let votes = region.votes();
        println!("{:<22} {:<4} {:>12} {:>12} {:>10} {:>12} {:>12} {:>6}",
            region.name(), region.code(),
            fmt_votes(votes.republican), fmt_votes(votes.democrat), fmt_votes(votes.third),
            fmt_votes(votes.total()), fmt_delta(votes.margin()), votes.winner().to_str());
    }

    let national = baseline.national_votes();
    println!("{:<27} {:>12} {:>12} {:>10} {:>12} {:>12} {:>6}", "National",
        fmt_votes(national.republican), fmt_votes(national.democrat), fmt_votes(national.third),
        fmt_votes(national.total()), fmt_delta(national.margin()), national.winner().to_str());
    Ok(())
}
