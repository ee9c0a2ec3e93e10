use std::path::{Path, PathBuf};

use ahash::AHashMap;
use tracing::debug;

use crate::{demographics::MarginalTable, region::Baseline};

type CacheKey = (Option<PathBuf>, Option<PathBuf>);

/// Memoizes marginal tables by the file locations they were read from.
///
/// Source tables are constant for a session, so repeated simulation runs
/// against the same paths reuse the parsed table.
#[derive(Debug, Default)]
pub struct SourceCache {
    entries: AHashMap<CacheKey, MarginalTable>,
}

impl SourceCache {
    pub fn new() -> Self { Self::default() }

    /// Return the table for these paths, loading it on first use.
    pub fn get_or_load(&mut self, race: Option<&Path>, education: Option<&Path>, baseline: &Baseline) -> &MarginalTable {
        let key = (race.map(Path::to_path_buf), education.map(Path::to_path_buf));
        self.entries.entry(key).or_insert_with(|| {
            debug!(?race, ?education, "demographic sources not cached; loading");
            MarginalTable::load(race, education, baseline)
        })
    }

    /// Number of distinct source combinations loaded.
    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Forget every cached table (e.g. after the files changed on disk).
    pub fn clear(&mut self) { self.entries.clear() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_paths_load_once() {
        let baseline = Baseline::election_2024().unwrap();
        let mut cache = SourceCache::new();
        let missing = Path::new("/no/such/race.csv");

        assert!(cache.get_or_load(Some(missing), None, &baseline).race().is_estimated());
        cache.get_or_load(Some(missing), None, &baseline);
        assert_eq!(cache.len(), 1);

        cache.get_or_load(None, None, &baseline);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
