mod results;
mod scenario;
mod simulation;
mod table;

pub use results::{NationalSummary, RegionResult, SimulationResult};
pub use scenario::Scenario;
pub use simulation::Simulation;
pub use table::RESULT_COLUMNS;
