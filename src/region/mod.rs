mod baseline;
mod data;
mod region;

pub use baseline::Baseline;
pub use region::{Party, PartyVotes, Region};
