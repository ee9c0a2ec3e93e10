use super::cell::{Cell, PerCell};

/// Joint shares of the four cells within one region.
///
/// Race and education are treated as independent, so each cell share is the
/// product of one marginal (or its complement) from each dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellShares {
    white: f64,
    college: f64,
    shares: PerCell<f64>,
}

impl CellShares {
    /// Estimate joint cell shares from a white share `w` and a college share `c`.
    /// Both marginals are clamped to [0, 1]; callers resolve non-finite values first.
    pub fn estimate(white: f64, college: f64) -> Self {
        let w = white.clamp(0.0, 1.0);
        let c = college.clamp(0.0, 1.0);
        let shares = PerCell {
            wc: w * c,
            wnc: w * (1.0 - c),
            nwc: (1.0 - w) * c,
            nwnc: (1.0 - w) * (1.0 - c),
        };
        Self { white: w, college: c, shares }
    }

    /// The (clamped) white share used for the estimate.
    #[inline] pub fn white(&self) -> f64 { self.white }

    /// The (clamped) college share used for the estimate.
    #[inline] pub fn college(&self) -> f64 { self.college }

    #[inline] pub fn share(&self, cell: Cell) -> f64 { self.shares[cell] }

    #[inline] pub fn shares(&self) -> &PerCell<f64> { &self.shares }
}

/// Split a region's total baseline turnout across the four cells.
pub fn decompose_turnout(total: f64, shares: &CellShares) -> PerCell<f64> {
    shares.shares().map(|_, &share| total * share)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_of_marginals() {
        let shares = CellShares::estimate(0.8, 0.25);
        assert!((shares.share(Cell::WhiteCollege) - 0.2).abs() < 1e-12);
        assert!((shares.share(Cell::WhiteNonCollege) - 0.6).abs() < 1e-12);
        assert!((shares.share(Cell::NonWhiteCollege) - 0.05).abs() < 1e-12);
        assert!((shares.share(Cell::NonWhiteNonCollege) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_marginals_are_clamped() {
        let shares = CellShares::estimate(1.7, -0.2);
        assert_eq!(shares.white(), 1.0);
        assert_eq!(shares.college(), 0.0);
        assert_eq!(shares.share(Cell::WhiteNonCollege), 1.0);
        assert_eq!(shares.share(Cell::NonWhiteCollege), 0.0);
    }

    #[test]
    fn decomposition_preserves_total() {
        let shares = CellShares::estimate(0.61, 0.37);
        let cells = decompose_turnout(3_058_745.0, &shares);
        let sum: f64 = cells.iter().map(|(_, v)| *v).sum();
        assert!((sum - 3_058_745.0).abs() < 1e-6);
    }

    #[test]
    fn even_split_gives_quarters() {
        let cells = decompose_turnout(200.0, &CellShares::estimate(0.5, 0.5));
        for (_, turnout) in cells.iter() {
            assert_eq!(*turnout, 50.0);
        }
    }
}
