use super::allocator::{AllocatorOptions, allocate_with_caps};

/// Turnout for one cell across all regions after applying its meter.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterOutcome {
    /// Extra turnout allocated to each region.
    pub extra: Vec<f64>,
    /// Baseline plus extra, per region.
    pub simulated: Vec<f64>,
    /// National extra turnout requested (`meter * sum(cap)`).
    pub target: f64,
    /// Requested extra turnout the caps could not absorb.
    pub unallocated: f64,
}

/// Raise one cell's turnout by releasing a fraction `meter` of its national cap.
///
/// Each region may gain at most `cap_factor * baseline[i]`. The national target
/// is `meter * sum(cap)`, so a meter of 1 asks for every region's full cap.
/// Regions holding more of the cell's baseline turnout receive more.
pub fn apply_turnout_meter(baseline: &[f64], meter: f64, cap_factor: f64, options: &AllocatorOptions) -> MeterOutcome {
    let meter = if meter.is_finite() { meter.clamp(0.0, 1.0) } else { 0.0 };
    let cap_factor = if cap_factor.is_finite() { cap_factor.clamp(0.0, 1.0) } else { 0.0 };

    let cap = baseline.iter().map(|&b| cap_factor * b.max(0.0)).collect::<Vec<_>>();
    let target = meter * cap.iter().sum::<f64>();

    let baseline_sum: f64 = baseline.iter().map(|b| b.max(0.0)).sum();
    let presence = match baseline_sum > 0.0 {
        true => baseline.iter().map(|&b| b.max(0.0) / baseline_sum).collect::<Vec<_>>(),
        false => vec![1.0 / baseline.len().max(1) as f64; baseline.len()],
    };

    let allocation = allocate_with_caps(target, &presence, &cap, options);
    let simulated = baseline.iter().zip(&allocation.alloc).map(|(b, e)| b + e).collect();

    MeterOutcome { extra: allocation.alloc, simulated, target, unallocated: allocation.remaining }
}
