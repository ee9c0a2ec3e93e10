use ahash::AHashMap;
use anyhow::{Context, Result, ensure};

use super::{data, region::{PartyVotes, Region}};

/// An ordered, validated set of regions with their baseline vote counts.
#[derive(Debug, Clone)]
pub struct Baseline {
    regions: Vec<Region>,
    index: AHashMap<String, usize>, // Map between region names and positions.
}

impl Baseline {
    /// Build a baseline from a list of regions.
    /// Fails if the list is empty, a name or code repeats, or any region has zero turnout.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        ensure!(!regions.is_empty(), "[Baseline::new] baseline must contain at least one region");

        let mut index = AHashMap::with_capacity(regions.len());
        let mut codes = AHashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            ensure!(region.total_turnout() > 0,
                "[Baseline::new] region '{}' has zero baseline turnout", region.name());
            ensure!(index.insert(region.name().to_string(), i).is_none(),
                "[Baseline::new] duplicate region name '{}'", region.name());
            ensure!(codes.insert(region.code().to_string(), i).is_none(),
                "[Baseline::new] duplicate region code '{}'", region.code());
        }

        Ok(Self { regions, index })
    }

    /// The embedded 2024 presidential result for the 50 states and DC.
    pub fn election_2024() -> Result<Self> {
        let regions = data::ELECTION_2024.iter()
            .map(|&(name, republican, democrat, third)| {
                let code = data::code_for(name)
                    .with_context(|| format!("[Baseline::election_2024] no code for region '{name}'"))?;
                Ok(Region::new(name, code, republican, democrat, third))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(regions)
    }

    /// Number of regions.
    #[inline] pub fn len(&self) -> usize { self.regions.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Regions in baseline order.
    #[inline] pub fn regions(&self) -> &[Region] { &self.regions }

    /// Position of a region by its full name.
    #[inline] pub fn index_of(&self, name: &str) -> Option<usize> { self.index.get(name).copied() }

    /// Whether the baseline contains a region with this name.
    #[inline] pub fn contains(&self, name: &str) -> bool { self.index.contains_key(name) }

    /// Total baseline turnout of each region, as floating point.
    pub fn turnouts(&self) -> Vec<f64> {
        self.regions.iter().map(|region| region.total_turnout() as f64).collect()
    }

    /// National baseline vote totals.
    pub fn national_votes(&self) -> PartyVotes {
        self.regions.iter().map(Region::votes).sum()
    }
}
