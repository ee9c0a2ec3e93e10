use std::sync::Arc;

use serde::Serialize;

/// The three party buckets tracked by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Party {
    Republican,
    Democrat,
    Third,
}

impl Party {
    pub fn to_str(&self) -> &'static str {
        match self {
            Party::Republican => "R",
            Party::Democrat => "D",
            Party::Third => "T",
        }
    }
}

/// Vote totals for the three party buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PartyVotes {
    pub republican: f64,
    pub democrat: f64,
    pub third: f64,
}

impl PartyVotes {
    #[inline]
    pub fn new(republican: f64, democrat: f64, third: f64) -> Self {
        Self { republican, democrat, third }
    }

    #[inline] pub fn total(&self) -> f64 { self.republican + self.democrat + self.third }

    /// Republican minus Democrat.
    #[inline] pub fn margin(&self) -> f64 { self.republican - self.democrat }

    /// Tie goes to the Republican: a margin of exactly zero is not a Democratic win.
    #[inline]
    pub fn winner(&self) -> Party {
        if self.margin() >= 0.0 { Party::Republican } else { Party::Democrat }
    }
}

impl std::ops::Add for PartyVotes {
    type Output = PartyVotes;

    fn add(self, rhs: PartyVotes) -> PartyVotes {
        PartyVotes::new(
            self.republican + rhs.republican,
            self.democrat + rhs.democrat,
            self.third + rhs.third,
        )
    }
}

impl std::ops::Sub for PartyVotes {
    type Output = PartyVotes;

    fn sub(self, rhs: PartyVotes) -> PartyVotes {
        PartyVotes::new(
            self.republican - rhs.republican,
            self.democrat - rhs.democrat,
            self.third - rhs.third,
        )
    }
}

impl std::iter::Sum for PartyVotes {
    fn sum<I: Iterator<Item = PartyVotes>>(iter: I) -> Self {
        iter.fold(PartyVotes::default(), |acc, votes| acc + votes)
    }
}

/// A state (or the federal district) with its baseline vote counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    name: Arc<str>, // e.g. "District of Columbia"
    code: Arc<str>, // e.g. "DC"
    republican: u64,
    democrat: u64,
    third: u64,
}

impl Region {
    pub fn new(name: &str, code: &str, republican: u64, democrat: u64, third: u64) -> Self {
        Self { name: name.into(), code: code.into(), republican, democrat, third }
    }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn code(&self) -> &str { &self.code }

    /// Baseline votes as floating point totals.
    #[inline]
    pub fn votes(&self) -> PartyVotes {
        PartyVotes::new(self.republican as f64, self.democrat as f64, self.third as f64)
    }

    /// Total baseline turnout (sum of the three party buckets).
    #[inline] pub fn total_turnout(&self) -> u64 { self.republican + self.democrat + self.third }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_turnout_sums_parties() {
        let region = Region::new("Delaware", "DE", 214351, 289758, 8803);
        assert_eq!(region.total_turnout(), 512912);
        assert_eq!(region.votes().total(), 512912.0);
    }

    #[test]
    fn exact_tie_goes_to_republican() {
        let votes = PartyVotes::new(100.0, 100.0, 3.0);
        assert_eq!(votes.margin(), 0.0);
        assert_eq!(votes.winner(), Party::Republican);
        assert_eq!(PartyVotes::new(99.0, 100.0, 0.0).winner(), Party::Democrat);
    }

    #[test]
    fn party_votes_sum() {
        let total: PartyVotes = [PartyVotes::new(1.0, 2.0, 3.0), PartyVotes::new(4.0, 5.0, 6.0)]
            .into_iter()
            .sum();
        assert_eq!(total, PartyVotes::new(5.0, 7.0, 9.0));
    }
}
