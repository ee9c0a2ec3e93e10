mod cache;
mod cell;
mod marginal;
mod shares;

pub use cache::SourceCache;
pub use cell::{Cell, PerCell};
pub use marginal::{MarginalShares, MarginalTable, SourceEstimate, SourceStatus, COLLEGE_FALLBACK, WHITE_FALLBACK};
pub use shares::{CellShares, decompose_turnout};
