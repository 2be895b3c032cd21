use std::convert::Infallible;
use std::str::FromStr;

use log::debug;

use crate::pattern::errors::PatternError;

/// One position of a plate: an ordered set of symbols with their costs.
///
/// Index 0 holds the cheapest (most probable) symbol and costs never decrease
/// with the index. Every constructor upholds that ordering, which is what lets
/// the frontier engine emit plates in ascending total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    symbols: Vec<char>,
    costs: Vec<f64>,
}

impl Pattern {
    /// Build a pattern whose costs increase densely from 0 in symbol order.
    pub(crate) fn from_ranked_symbols(symbols: Vec<char>) -> Self {
        let costs = (0..symbols.len()).map(|rank| rank as f64).collect();
        Self { symbols, costs }
    }

    /// Build a pattern from caller-supplied costs.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, if any cost is NaN or infinite,
    /// or if a cost is lower than the one before it. Symbols are never
    /// reordered to repair the input.
    pub fn with_costs(symbols: Vec<char>, costs: Vec<f64>) -> Result<Self, PatternError> {
        if symbols.len() != costs.len() {
            return Err(PatternError::LengthMismatch {
                symbols: symbols.len(),
                costs: costs.len(),
            });
        }

        for (index, cost) in costs.iter().enumerate() {
            if !cost.is_finite() {
                return Err(PatternError::NonFiniteCost { index });
            }
        }

        if let Some(index) = costs.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(PatternError::DecreasingCost {
                index: index + 1,
                previous: costs[index],
                current: costs[index + 1],
            });
        }

        debug!("Built pattern with {} weighted symbols", symbols.len());
        Ok(Self { symbols, costs })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn cost(&self, index: usize) -> Option<f64> {
        self.costs.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    /// Invalid alternatives are skipped, never fatal.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(spec))
    }
}
