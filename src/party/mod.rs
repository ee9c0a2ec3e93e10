mod profile;
mod shares;

pub use profile::{PartyProfile, default_profile};
pub use shares::{PartyShares, Swing, normalize_three};
