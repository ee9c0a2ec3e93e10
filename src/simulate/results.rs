use std::{cmp::Ordering, path::Path};

use anyhow::Result;

use crate::{
    demographics::{Cell, CellShares, PerCell, SourceStatus},
    io::{write_csv, write_csv_string},
    party::PartyShares,
    region::{Party, PartyVotes},
};

use super::{Scenario, table::result_dataframe};

/// Simulated outcome for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionResult {
    pub name: String,
    pub code: String,
    pub baseline: PartyVotes,
    pub votes: PartyVotes,
    /// Marginal and joint shares used to split the region.
    pub shares: CellShares,
    /// Simulated turnout per cell.
    pub turnout: PerCell<f64>,
    /// Extra turnout allocated per cell.
    pub extra: PerCell<f64>,
}

impl RegionResult {
    /// Sum of simulated cell turnout.
    pub fn total_turnout(&self) -> f64 { self.turnout.iter().map(|(_, t)| *t).sum() }

    #[inline] pub fn baseline_turnout(&self) -> f64 { self.baseline.total() }

    /// Simulated minus baseline turnout.
    #[inline] pub fn turnout_change(&self) -> f64 { self.total_turnout() - self.baseline_turnout() }

    /// Republican minus Democratic simulated votes.
    #[inline] pub fn margin(&self) -> f64 { self.votes.margin() }

    /// Margin in percentage points of simulated turnout (0 for an empty region).
    pub fn margin_pct(&self) -> f64 {
        let total = self.total_turnout();
        if total > 0.0 { 100.0 * self.margin() / total } else { 0.0 }
    }

    /// Ties go to the Republican.
    #[inline] pub fn winner(&self) -> Party { self.votes.winner() }
}

/// National totals compared with the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NationalSummary {
    pub baseline: PartyVotes,
    pub votes: PartyVotes,
}

impl NationalSummary {
    #[inline] pub fn total(&self) -> f64 { self.votes.total() }

    #[inline] pub fn margin(&self) -> f64 { self.votes.margin() }

    /// Ties go to the Republican.
    #[inline] pub fn winner(&self) -> Party { self.votes.winner() }

    /// Simulated minus baseline votes, per party.
    #[inline] pub fn delta(&self) -> PartyVotes { self.votes - self.baseline }
}

/// Complete output of one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub scenario: Scenario,
    pub regions: Vec<RegionResult>,
    pub national: NationalSummary,
    /// Resolved party split applied to each cell.
    pub party_shares: PerCell<PartyShares>,
    /// Extra turnout each cell requested but could not place because caps saturated.
    pub unallocated: PerCell<f64>,
    pub race_status: SourceStatus,
    pub education_status: SourceStatus,
}

impl SimulationResult {
    /// Regions sorted by turnout change, largest first, truncated to `n`.
    pub fn top_turnout_changes(&self, n: usize) -> Vec<&RegionResult> {
        let mut regions = self.regions.iter().collect::<Vec<_>>();
        regions.sort_by(|a, b| b.turnout_change().partial_cmp(&a.turnout_change()).unwrap_or(Ordering::Equal));
        regions.truncate(n);
        regions
    }

    /// Regions sorted by margin, most Republican first.
    pub fn by_margin(&self) -> Vec<&RegionResult> {
        let mut regions = self.regions.iter().collect::<Vec<_>>();
        regions.sort_by(|a, b| b.margin().partial_cmp(&a.margin()).unwrap_or(Ordering::Equal));
        regions
    }

    /// Number of regions won by each major party.
    pub fn regions_won(&self, party: Party) -> usize {
        self.regions.iter().filter(|region| region.winner() == party).count()
    }

    /// Simulated turnout of one cell summed over every region.
    pub fn cell_turnout(&self, cell: Cell) -> f64 {
        self.regions.iter().map(|region| region.turnout[cell]).sum()
    }

    /// Write the result table as CSV to `path`.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        write_csv(&mut result_dataframe(&self.regions)?, path)
    }

    /// Render the result table as CSV text.
    pub fn to_csv_string(&self) -> Result<String> {
        write_csv_string(&mut result_dataframe(&self.regions)?)
    }
}
