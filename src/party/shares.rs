use serde::{Deserialize, Serialize};

use crate::region::PartyVotes;

/// Sums at or below this are treated as zero during normalization.
const NORMALIZE_EPSILON: f64 = 1e-12;

/// A three-way party split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartyShares {
    #[serde(rename = "R")]
    pub republican: f64,
    #[serde(rename = "D")]
    pub democrat: f64,
    #[serde(rename = "T")]
    pub third: f64,
}

/// Percentage-point adjustments to a cell's Republican and Third shares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swing {
    pub republican: f64,
    pub third: f64,
}

impl Swing {
    pub fn new(republican: f64, third: f64) -> Self { Self { republican, third } }
}

/// Clamp each share to be non-negative and scale the triple to sum to 1.
/// A triple with no positive mass becomes all-Democrat.
pub fn normalize_three(republican: f64, democrat: f64, third: f64) -> PartyShares {
    let clip = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let (r, d, t) = (clip(republican), clip(democrat), clip(third));
    let sum = r + d + t;
    if sum <= NORMALIZE_EPSILON {
        return PartyShares { republican: 0.0, democrat: 1.0, third: 0.0 };
    }
    PartyShares { republican: r / sum, democrat: d / sum, third: t / sum }
}

impl PartyShares {
    pub fn new(republican: f64, democrat: f64, third: f64) -> Self {
        Self { republican, democrat, third }
    }

    /// Apply a swing and renormalize.
    ///
    /// Only the Republican and Third shares move; the Democratic share is the
    /// residual after normalization, so it shrinks or grows in proportion to
    /// the other two. Large combined swings therefore squeeze the Democratic
    /// share non-linearly.
    pub fn resolve(&self, swing: Swing) -> PartyShares {
        normalize_three(
            self.republican + swing.republican / 100.0,
            self.democrat,
            self.third + swing.third / 100.0,
        )
    }

    /// Votes cast for each party by `turnout` voters.
    #[inline]
    pub fn votes(&self, turnout: f64) -> PartyVotes {
        PartyVotes::new(turnout * self.republican, turnout * self.democrat, turnout * self.third)
    }
}
