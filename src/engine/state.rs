use std::collections::{BTreeMap, BinaryHeap, HashSet};

use crate::engine::frontier::FrontierEntry;
use crate::plate::Plate;

/// Everything the engine has produced so far.
#[derive(Debug, Clone, Default)]
pub struct GeneratorCache {
    /// Plates confirmed in final ascending-cost order
    pub(crate) ordered: Vec<Plate>,
    /// Plates discovered but not yet confirmed
    pub(crate) frontier: BinaryHeap<FrontierEntry>,
    /// Index vectors already pushed to the frontier, grouped by index sum
    pub(crate) discovered: BTreeMap<usize, HashSet<Vec<usize>>>,
}

impl GeneratorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `indices` as discovered. Returns false if it already was.
    pub fn mark_discovered(&mut self, index_sum: usize, indices: &[usize]) -> bool {
        let level = self.discovered.entry(index_sum).or_default();
        if level.contains(indices) {
            return false;
        }
        level.insert(indices.to_vec())
    }

    pub fn is_untouched(&self) -> bool {
        self.ordered.is_empty() && self.frontier.is_empty()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn discovered_len(&self) -> usize {
        self.discovered.values().map(HashSet::len).sum()
    }
}
