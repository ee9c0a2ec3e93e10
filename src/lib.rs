#![doc = "Demographic turnout simulator public API"]
mod allocate;
mod demographics;
mod io;
mod party;
mod region;
mod simulate;

#[doc(inline)]
pub use region::{Baseline, Party, PartyVotes, Region};

#[doc(inline)]
pub use demographics::{
    Cell, CellShares, MarginalShares, MarginalTable, PerCell, SourceCache, SourceEstimate, SourceStatus,
    COLLEGE_FALLBACK, WHITE_FALLBACK, decompose_turnout,
};

#[doc(inline)]
pub use allocate::{Allocation, AllocatorOptions, MeterOutcome, allocate_with_caps, apply_turnout_meter};

#[doc(inline)]
pub use party::{PartyProfile, PartyShares, Swing, default_profile, normalize_three};

#[doc(inline)]
pub use simulate::{NationalSummary, RegionResult, RESULT_COLUMNS, Scenario, Simulation, SimulationResult};

/// Demographic source tables and column detection.
pub mod sources {
    pub use crate::io::{
        ColumnResolver, EducationColumns, KeywordMatch, RaceColumns, SourceError, SourceTable,
        education_shares, race_shares, read_education_source, read_race_source,
    };
}
