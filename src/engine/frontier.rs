use std::cmp::Ordering;

use crate::plate::Plate;

/// Wrapper that orders plates for the frontier heap.
///
/// `BinaryHeap` pops the greatest element, so the ordering is reversed: the
/// cheapest plate compares greatest. Plates of equal cost fall back to their
/// index vectors, smallest first, which keeps enumeration deterministic.
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry(pub(crate) Plate);

impl FrontierEntry {
    pub fn into_plate(self) -> Plate {
        self.0
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .cost()
            .total_cmp(&self.0.cost())
            .then_with(|| other.0.indices().cmp(self.0.indices()))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
