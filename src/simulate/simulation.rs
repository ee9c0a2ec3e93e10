use std::sync::Arc;

use tracing::debug;

use crate::{
    allocate::apply_turnout_meter,
    demographics::{Cell, CellShares, MarginalTable, PerCell, SourceStatus, decompose_turnout},
    region::{Baseline, PartyVotes},
};

use super::{NationalSummary, RegionResult, Scenario, SimulationResult};

/// The fixed part of a simulation: baseline votes split into demographic cells.
///
/// Building a `Simulation` estimates the cell shares and baseline cell turnout
/// once; each [`Simulation::run`] is then a pure function of the scenario.
#[derive(Debug, Clone)]
pub struct Simulation {
    baseline: Arc<Baseline>,
    shares: Vec<CellShares>,          // Per region, in baseline order.
    cell_baseline: PerCell<Vec<f64>>, // Per cell, baseline turnout of each region.
    race_status: SourceStatus,
    education_status: SourceStatus,
}

impl Simulation {
    /// Decompose `baseline` turnout using the marginals in `marginals`.
    pub fn new(baseline: impl Into<Arc<Baseline>>, marginals: &MarginalTable) -> Self {
        let baseline: Arc<Baseline> = baseline.into();

        let shares = marginals.for_baseline(&baseline).into_iter()
            .map(|m| CellShares::estimate(m.white, m.college))
            .collect::<Vec<_>>();

        let by_region = baseline.turnouts().into_iter().zip(&shares)
            .map(|(total, shares)| decompose_turnout(total, shares))
            .collect::<Vec<_>>();
        let cell_baseline = PerCell::from_fn(|cell| by_region.iter().map(|cells| cells[cell]).collect());

        Self {
            baseline,
            shares,
            cell_baseline,
            race_status: marginals.race().status().clone(),
            education_status: marginals.education().status().clone(),
        }
    }

    #[inline] pub fn baseline(&self) -> &Baseline { &self.baseline }

    /// Joint cell shares per region, in baseline order.
    #[inline] pub fn shares(&self) -> &[CellShares] { &self.shares }

    /// Baseline turnout of one cell in every region.
    #[inline] pub fn cell_baseline(&self, cell: Cell) -> &[f64] { &self.cell_baseline[cell] }

    /// Run the scenario against the decomposed baseline.
    pub fn run(&self, scenario: &Scenario) -> SimulationResult {
        let scenario = scenario.sanitized();

        let outcomes = PerCell::from_fn(|cell| {
            apply_turnout_meter(&self.cell_baseline[cell], scenario.meters[cell], scenario.cap_factor, &scenario.allocator)
        });
        let party_shares = PerCell::from_fn(|cell| scenario.profile[cell].resolve(scenario.swings[cell]));

        for (cell, outcome) in outcomes.iter() {
            debug!(cell = cell.to_str(), target = outcome.target, unallocated = outcome.unallocated, "applied turnout meter");
        }

        let regions = self.baseline.regions().iter().enumerate()
            .map(|(i, region)| {
                let turnout = outcomes.map(|_, outcome| outcome.simulated[i]);
                let extra = outcomes.map(|_, outcome| outcome.extra[i]);
                let votes = turnout.iter()
                    .map(|(cell, &t)| party_shares[cell].votes(t))
                    .sum::<PartyVotes>();

                RegionResult {
                    name: region.name().to_string(),
                    code: region.code().to_string(),
                    baseline: region.votes(),
                    votes,
                    shares: self.shares[i],
                    turnout,
                    extra,
                }
            })
            .collect::<Vec<_>>();

        let national = NationalSummary {
            baseline: self.baseline.national_votes(),
            votes: regions.iter().map(|region| region.votes).sum(),
        };

        SimulationResult {
            unallocated: outcomes.map(|_, outcome| outcome.unallocated),
            scenario,
            regions,
            national,
            party_shares,
            race_status: self.race_status.clone(),
            education_status: self.education_status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn two_regions() -> Simulation {
        let baseline = Baseline::new(vec![
            Region::new("North", "NO", 600, 300, 100),
            Region::new("South", "SO", 100, 800, 100),
        ]).unwrap();
        Simulation::new(baseline, &MarginalTable::fallback())
    }

    #[test]
    fn cell_baselines_sum_to_region_totals() {
        let sim = two_regions();
        for (i, total) in sim.baseline().turnouts().into_iter().enumerate() {
            let sum: f64 = Cell::order().iter().map(|&cell| sim.cell_baseline(cell)[i]).sum();
            assert!((sum - total).abs() < 1e-6);
        }
    }

    #[test]
    fn default_scenario_keeps_turnout() {
        let sim = two_regions();
        let result = sim.run(&Scenario::default());
        for region in &result.regions {
            assert!((region.total_turnout() - region.baseline_turnout()).abs() < 1e-9);
            assert!(region.extra.iter().all(|(_, e)| *e == 0.0));
        }
    }

    #[test]
    fn full_meter_adds_cap_factor_share() {
        let sim = two_regions();
        let scenario = Scenario::default().with_meter(Cell::WhiteNonCollege, 1.0).with_cap_factor(0.1);
        let result = sim.run(&scenario);

        for (i, region) in result.regions.iter().enumerate() {
            let base = sim.cell_baseline(Cell::WhiteNonCollege)[i];
            assert!((region.turnout[Cell::WhiteNonCollege] - base * 1.1).abs() < 1e-6);
            assert_eq!(region.turnout[Cell::WhiteCollege], sim.cell_baseline(Cell::WhiteCollege)[i]);
        }
        assert!(result.unallocated[Cell::WhiteNonCollege] < 1e-6);
    }

    #[test]
    fn national_is_sum_of_regions() {
        let sim = two_regions();
        let scenario = Scenario::default()
            .with_meter(Cell::NonWhiteCollege, 0.6)
            .with_swing(Cell::WhiteCollege, crate::party::Swing::new(3.0, -1.0));
        let result = sim.run(&scenario);
        let summed: PartyVotes = result.regions.iter().map(|region| region.votes).sum();
        assert!((result.national.votes.republican - summed.republican).abs() < 1e-6);
        assert!((result.national.votes.democrat - summed.democrat).abs() < 1e-6);
        assert!((result.national.votes.third - summed.third).abs() < 1e-6);
    }

    #[test]
    fn statuses_follow_marginals() {
        let result = two_regions().run(&Scenario::default());
        assert!(matches!(result.race_status, SourceStatus::Estimated { .. }));
        assert!(matches!(result.education_status, SourceStatus::Estimated { .. }));
    }
}
