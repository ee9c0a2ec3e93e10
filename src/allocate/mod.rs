mod allocator;
mod meter;

pub use allocator::{Allocation, AllocatorOptions, allocate_with_caps};
pub use meter::{MeterOutcome, apply_turnout_meter};
