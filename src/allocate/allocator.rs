//! Capped, presence-weighted allocation of a national turnout budget.
//!
//! A single proportional pass over-allocates to regions that hit their cap and
//! wastes the surplus. The allocator instead repeats the proportional split on
//! whatever budget is left, over the regions that still have room, using the
//! original presence weights. Every pass either exhausts the budget or fills at
//! least one region, so it settles within a pass per region.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight sums at or below this are treated as zero.
const WEIGHT_EPSILON: f64 = 1e-12;

/// Tuning knobs for [`allocate_with_caps`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorOptions {
    /// Upper bound on redistribution passes.
    pub max_iterations: usize,
    /// Budget and spare room at or below this are treated as exhausted.
    pub tolerance: f64,
}

impl Default for AllocatorOptions {
    fn default() -> Self {
        Self { max_iterations: 200, tolerance: 1e-6 }
    }
}

/// Result of a capped allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Amount given to each region; `0 <= alloc[i] <= cap[i]`.
    pub alloc: Vec<f64>,
    /// Budget left over because every cap saturated (or the pass bound was hit).
    pub remaining: f64,
    /// Number of redistribution passes performed.
    pub passes: usize,
}

impl Allocation {
    fn zeros(len: usize, remaining: f64) -> Self {
        Self { alloc: vec![0.0; len], remaining, passes: 0 }
    }

    /// Sum of the allocation.
    #[inline] pub fn total(&self) -> f64 { self.alloc.iter().sum() }
}

/// Clip negative and non-finite entries to zero.
#[inline]
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Distribute `target_extra` across regions in proportion to `presence`,
/// never giving region `i` more than `cap[i]`.
///
/// The allocation sums to `min(target_extra, sum(cap))` up to the tolerance.
/// When caps bind everywhere, every region is saturated and the unabsorbed
/// budget is reported in [`Allocation::remaining`]; this is not an error.
/// If every active region has zero presence, the budget is split uniformly.
pub fn allocate_with_caps(target_extra: f64, presence: &[f64], cap: &[f64], options: &AllocatorOptions) -> Allocation {
    assert_eq!(presence.len(), cap.len(),
        "allocate_with_caps: presence length ({}) must match cap length ({})",
        presence.len(),
        cap.len(),
    );

    let n = cap.len();
    let presence = presence.iter().copied().map(non_negative).collect::<Vec<_>>();
    let cap = cap.iter().copied().map(non_negative).collect::<Vec<_>>();
    let tolerance = options.tolerance.max(0.0);

    let mut remaining = non_negative(target_extra);
    let mut active = (0..n).filter(|&i| cap[i] > tolerance).collect::<Vec<_>>();
    if remaining <= 0.0 || active.is_empty() { return Allocation::zeros(n, remaining) }

    let mut alloc = vec![0.0; n];
    let mut passes = 0;
    while passes < options.max_iterations && remaining > tolerance && !active.is_empty() {
        passes += 1;

        let mut weights = active.iter().map(|&i| presence[i]).collect::<Vec<_>>();
        let mut weight_sum: f64 = weights.iter().sum();
        if weight_sum <= WEIGHT_EPSILON {
            weights.fill(1.0);
            weight_sum = weights.len() as f64;
        }

        let mut taken = 0.0;
        for (&i, &weight) in active.iter().zip(&weights) {
            let proposed = weight / weight_sum * remaining;
            let next = (alloc[i] + proposed).min(cap[i]);
            taken += next - alloc[i];
            alloc[i] = next;
        }
        remaining = (remaining - taken).max(0.0);

        active.retain(|&i| cap[i] - alloc[i] > tolerance);
    }

    debug!(passes, remaining, saturated = active.is_empty(), "capped allocation finished");
    Allocation { alloc, remaining, passes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocate(target: f64, presence: &[f64], cap: &[f64]) -> Allocation {
        allocate_with_caps(target, presence, cap, &AllocatorOptions::default())
    }

    #[test]
    fn zero_budget_allocates_nothing() {
        let result = allocate(0.0, &[1.0, 2.0, 3.0], &[10.0, 10.0, 10.0]);
        assert_eq!(result.alloc, vec![0.0, 0.0, 0.0]);
        assert_eq!(result.passes, 0);
    }

    #[test]
    fn negative_budget_allocates_nothing() {
        let result = allocate(-5.0, &[1.0, 1.0], &[10.0, 10.0]);
        assert_eq!(result.alloc, vec![0.0, 0.0]);
    }

    #[test]
    fn single_open_region_saturates() {
        let result = allocate(100.0, &[1.0, 1.0, 1.0], &[10.0, 0.0, 0.0]);
        assert_eq!(result.alloc, vec![10.0, 0.0, 0.0]);
        assert!((result.remaining - 90.0).abs() < 1e-9);
    }

    #[test]
    fn proportional_when_caps_do_not_bind() {
        let result = allocate(60.0, &[1.0, 2.0, 3.0], &[1e6, 1e6, 1e6]);
        assert!((result.alloc[0] - 10.0).abs() < 1e-9);
        assert!((result.alloc[1] - 20.0).abs() < 1e-9);
        assert!((result.alloc[2] - 30.0).abs() < 1e-9);
        assert_eq!(result.passes, 1);
    }

    #[test]
    fn surplus_is_reoffered_to_regions_with_room() {
        // Region 0 wants 50 but can only take 5; the other 45 is split evenly.
        let result = allocate(100.0, &[2.0, 1.0, 1.0], &[5.0, 100.0, 100.0]);
        assert_eq!(result.alloc[0], 5.0);
        assert!((result.alloc[1] - 47.5).abs() < 1e-6);
        assert!((result.alloc[2] - 47.5).abs() < 1e-6);
        assert!(result.passes >= 2);
    }

    #[test]
    fn pass_limit_stops_redistribution() {
        let options = AllocatorOptions { max_iterations: 1, ..AllocatorOptions::default() };
        let result = allocate_with_caps(100.0, &[2.0, 1.0, 1.0], &[5.0, 100.0, 100.0], &options);
        assert_eq!(result.passes, 1);
        assert_eq!(result.alloc, vec![5.0, 25.0, 25.0]);
        assert!((result.remaining - 45.0).abs() < 1e-9);
    }

    #[test]
    fn zero_presence_splits_uniformly() {
        let result = allocate(9.0, &[0.0, 0.0, 0.0], &[10.0, 10.0, 10.0]);
        for value in result.alloc {
            assert!((value - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_presence_is_clipped() {
        let result = allocate(10.0, &[-4.0, 1.0], &[100.0, 100.0]);
        assert_eq!(result.alloc[0], 0.0);
        assert!((result.alloc[1] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn total_cap_below_target_saturates_everything() {
        let cap = [3.0, 4.0, 5.0];
        let result = allocate(1000.0, &[5.0, 1.0, 0.5], &cap);
        assert_eq!(result.alloc, cap.to_vec());
        assert!((result.remaining - 988.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "must match cap length")]
    fn mismatched_lengths_panic() {
        allocate(1.0, &[1.0], &[1.0, 2.0]);
    }
}
