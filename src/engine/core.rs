use log::{debug, info, warn};

use crate::engine::frontier::FrontierEntry;
use crate::engine::state::GeneratorCache;
use crate::pattern::Pattern;
use crate::plate::Plate;

/// Best-first enumerator over the Cartesian product of a fixed list of
/// patterns.
///
/// Plates are produced lazily in non-decreasing cost order and cached, so a
/// later, larger request only computes the plates it is missing.
#[derive(Debug, Clone)]
pub struct FrontierEngine {
    patterns: Vec<Pattern>,
    total: Option<u64>,
    cache: GeneratorCache,
}

impl FrontierEngine {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let total = total_count(&patterns);
        match total {
            Some(total) => info!(
                "Initialized frontier engine with {} patterns and {} plates",
                patterns.len(),
                total
            ),
            None => warn!(
                "Plate count for {} patterns exceeds {}, treating it as unbounded",
                patterns.len(),
                u64::MAX
            ),
        }

        Self {
            patterns,
            total,
            cache: GeneratorCache::new(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Exact number of plates, or `None` if it does not fit in a `u64`.
    pub fn count_exact(&self) -> Option<u64> {
        self.total
    }

    /// Number of plates, saturating at `u64::MAX`.
    pub fn count(&self) -> u64 {
        self.total.unwrap_or(u64::MAX)
    }

    /// Plates confirmed so far, cheapest first.
    pub fn cached(&self) -> &[Plate] {
        &self.cache.ordered
    }

    pub(crate) fn cache(&self) -> &GeneratorCache {
        &self.cache
    }

    /// Make sure the first `min(wanted, count)` plates are cached and return
    /// how many are available. Plates already cached are left as they are.
    pub fn ensure(&mut self, wanted: u64) -> usize {
        let target = usize::try_from(wanted.min(self.count())).unwrap_or(usize::MAX);
        let before = self.cache.ordered.len();
        if before >= target {
            return target;
        }

        if self.cache.is_untouched() {
            self.seed();
        }

        while self.cache.ordered.len() < target {
            let Some(entry) = self.cache.frontier.pop() else {
                debug!("Frontier exhausted after {} plates", self.cache.ordered.len());
                break;
            };
            let plate = entry.into_plate();
            self.expand(&plate);
            self.cache.ordered.push(plate);
        }

        debug!(
            "Produced {} new plates ({} cached, {} on the frontier)",
            self.cache.ordered.len() - before,
            self.cache.ordered.len(),
            self.cache.frontier_len()
        );
        self.cache.ordered.len()
    }

    /// Push the all-zero plate, the cheapest one since every pattern's costs
    /// are non-decreasing.
    fn seed(&mut self) {
        match Plate::from_indices(&self.patterns, vec![0; self.patterns.len()]) {
            Some(plate) => {
                debug!("Seeding frontier with '{}' (cost {})", plate, plate.cost());
                self.cache.frontier.push(FrontierEntry(plate));
            }
            None => warn!("Cannot seed frontier: a pattern has no symbols"),
        }
    }

    /// Push every not-yet-discovered plate that differs from `plate` by one
    /// step in a single position.
    fn expand(&mut self, plate: &Plate) {
        for (position, pattern) in self.patterns.iter().enumerate() {
            let Some(next) = plate.successor(position, pattern) else {
                continue;
            };
            if self.cache.mark_discovered(next.index_sum(), next.indices()) {
                self.cache.frontier.push(FrontierEntry(next));
            }
        }
    }
}

/// Product of the pattern sizes: 0 without patterns or with an empty one,
/// `None` on overflow.
fn total_count(patterns: &[Pattern]) -> Option<u64> {
    if patterns.is_empty() || patterns.iter().any(Pattern::is_empty) {
        return Some(0);
    }

    patterns.iter().try_fold(1u64, |acc, pattern| {
        u64::try_from(pattern.len())
            .ok()
            .and_then(|len| acc.checked_mul(len))
    })
}
