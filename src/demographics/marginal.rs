use std::path::Path;

use ahash::AHashMap;
use tracing::{info, warn};

use crate::{io, region::Baseline};

/// White share used for every region when the race source is unusable.
pub const WHITE_FALLBACK: f64 = 0.75;

/// College share used for every region when the education source is unusable.
pub const COLLEGE_FALLBACK: f64 = 0.34;

/// Whether a marginal came from its source table or from the global fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded,
    Estimated { reason: String },
}

/// Per-region values for one marginal dimension, with a global fallback.
#[derive(Debug, Clone)]
pub struct SourceEstimate {
    values: AHashMap<String, f64>,
    fallback: f64,
    status: SourceStatus,
}

impl SourceEstimate {
    /// Values read from a usable source. Regions missing from `values` use `fallback`.
    pub fn loaded(values: AHashMap<String, f64>, fallback: f64) -> Self {
        Self { values, fallback, status: SourceStatus::Loaded }
    }

    /// No usable source: every region uses `fallback`.
    pub fn estimated(fallback: f64, reason: impl Into<String>) -> Self {
        Self { values: AHashMap::new(), fallback, status: SourceStatus::Estimated { reason: reason.into() } }
    }

    #[inline] pub fn status(&self) -> &SourceStatus { &self.status }

    #[inline] pub fn is_estimated(&self) -> bool { matches!(self.status, SourceStatus::Estimated { .. }) }

    #[inline] pub fn fallback(&self) -> f64 { self.fallback }

    /// Whether the source supplied a value for this region.
    #[inline] pub fn covers(&self, name: &str) -> bool { self.values.contains_key(name) }

    /// Value for a region, in [0, 1]. Missing or non-finite values resolve to the fallback.
    pub fn get(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(&value) if value.is_finite() => value.clamp(0.0, 1.0),
            _ => self.fallback,
        }
    }
}

/// The two marginal shares of one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginalShares {
    pub white: f64,
    pub college: f64,
}

/// Race and education marginals for every region.
#[derive(Debug, Clone)]
pub struct MarginalTable {
    race: SourceEstimate,
    education: SourceEstimate,
}

impl MarginalTable {
    pub fn new(race: SourceEstimate, education: SourceEstimate) -> Self {
        Self { race, education }
    }

    /// Both dimensions estimated from the global fallback constants.
    pub fn fallback() -> Self {
        Self {
            race: SourceEstimate::estimated(WHITE_FALLBACK, "no race source provided"),
            education: SourceEstimate::estimated(COLLEGE_FALLBACK, "no education source provided"),
        }
    }

    /// Load both marginals from CSV sources. Never fails: an unusable or
    /// missing source degrades to its fallback constant and is flagged estimated.
    pub fn load(race_path: Option<&Path>, education_path: Option<&Path>, baseline: &Baseline) -> Self {
        let race = match race_path {
            Some(path) => resolve(io::read_race_source(path, baseline), WHITE_FALLBACK, "race", path),
            None => SourceEstimate::estimated(WHITE_FALLBACK, "no race source provided"),
        };
        let education = match education_path {
            Some(path) => resolve(io::read_education_source(path, baseline), COLLEGE_FALLBACK, "education", path),
            None => SourceEstimate::estimated(COLLEGE_FALLBACK, "no education source provided"),
        };
        Self { race, education }
    }

    #[inline] pub fn race(&self) -> &SourceEstimate { &self.race }

    #[inline] pub fn education(&self) -> &SourceEstimate { &self.education }

    /// Marginal shares for a single region.
    pub fn get(&self, name: &str) -> MarginalShares {
        MarginalShares { white: self.race.get(name), college: self.education.get(name) }
    }

    /// Marginal shares for every region of `baseline`, in baseline order.
    pub fn for_baseline(&self, baseline: &Baseline) -> Vec<MarginalShares> {
        for (label, source) in [("race", &self.race), ("education", &self.education)] {
            if source.is_estimated() { continue }
            let missing = baseline.regions().iter().filter(|region| !source.covers(region.name())).count();
            if missing > 0 {
                warn!(source = label, missing, fallback = source.fallback(), "regions missing from source use the fallback share");
            }
        }

        baseline.regions().iter().map(|region| self.get(region.name())).collect()
    }
}

fn resolve(result: Result<AHashMap<String, f64>, io::SourceError>, fallback: f64, label: &str, path: &Path) -> SourceEstimate {
    match result {
        Ok(values) => {
            info!(source = label, path = %path.display(), regions = values.len(), "loaded demographic source");
            SourceEstimate::loaded(values, fallback)
        }
        Err(err) => {
            warn!(source = label, path = %path.display(), fallback, "{err}; using fallback share");
            SourceEstimate::estimated(fallback, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_table_is_flagged() {
        let table = MarginalTable::fallback();
        assert!(table.race().is_estimated());
        assert!(table.education().is_estimated());
        assert_eq!(table.get("Ohio"), MarginalShares { white: WHITE_FALLBACK, college: COLLEGE_FALLBACK });
    }

    #[test]
    fn missing_regions_and_bad_values_fall_back() {
        let values = AHashMap::from_iter([
            ("Ohio".to_string(), 0.77),
            ("Texas".to_string(), f64::NAN),
            ("Utah".to_string(), 1.4),
        ]);
        let race = SourceEstimate::loaded(values, WHITE_FALLBACK);
        assert!(!race.is_estimated());
        assert_eq!(race.get("Ohio"), 0.77);
        assert_eq!(race.get("Texas"), WHITE_FALLBACK);
        assert_eq!(race.get("Utah"), 1.0);
        assert_eq!(race.get("Maine"), WHITE_FALLBACK);
    }

    #[test]
    fn missing_paths_are_estimated() {
        let baseline = Baseline::election_2024().unwrap();
        let table = MarginalTable::load(None, None, &baseline);
        assert_eq!(table.race().status(), &SourceStatus::Estimated { reason: "no race source provided".into() });
        assert_eq!(table.for_baseline(&baseline).len(), 51);
    }
}
