use crate::demographics::PerCell;

use super::shares::PartyShares;

/// Baseline party preference of each cell.
pub type PartyProfile = PerCell<PartyShares>;

/// 2024 exit-poll style preferences by education x race.
/// The non-white non-college row sums to 0.99 as published; resolution renormalizes it.
pub fn default_profile() -> PartyProfile {
    PerCell {
        wc: PartyShares::new(0.45, 0.53, 0.02),
        wnc: PartyShares::new(0.65, 0.34, 0.01),
        nwc: PartyShares::new(0.29, 0.69, 0.02),
        nwnc: PartyShares::new(0.33, 0.65, 0.01),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::party::Swing;

    #[test]
    fn default_profile_resolves_to_probabilities() {
        for (cell, shares) in default_profile().iter() {
            let resolved = shares.resolve(Swing::default());
            let sum = resolved.republican + resolved.democrat + resolved.third;
            assert!((sum - 1.0).abs() < 1e-12, "{cell}: {sum}");
            assert!(resolved.democrat > resolved.republican || cell == crate::demographics::Cell::WhiteNonCollege);
        }
    }
}
