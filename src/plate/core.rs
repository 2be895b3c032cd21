use crate::pattern::Pattern;

/// One combination: the symbol chosen at every position, with the costs and
/// indices it was chosen at.
///
/// The total cost and index sum are derived once at construction and the
/// value is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    symbols: Vec<char>,
    costs: Vec<f64>,
    indices: Vec<usize>,
    cost: f64,
    index_sum: usize,
}

impl Plate {
    pub fn new(symbols: Vec<char>, costs: Vec<f64>, indices: Vec<usize>) -> Self {
        let cost: f64 = costs.iter().sum();
        let index_sum: usize = indices.iter().sum();
        Self {
            symbols,
            costs,
            indices,
            cost,
            index_sum,
        }
    }

    /// Build the plate selecting `indices[i]` from `patterns[i]`.
    ///
    /// Returns `None` if the lengths differ or any index is out of range.
    pub fn from_indices(patterns: &[Pattern], indices: Vec<usize>) -> Option<Self> {
        if patterns.len() != indices.len() {
            return None;
        }

        let mut symbols = Vec::with_capacity(indices.len());
        let mut costs = Vec::with_capacity(indices.len());
        for (pattern, &index) in patterns.iter().zip(&indices) {
            symbols.push(pattern.symbol(index)?);
            costs.push(pattern.cost(index)?);
        }

        Some(Self::new(symbols, costs, indices))
    }

    /// The plate one step further along `position` in `pattern`, or `None`
    /// once that pattern has no symbols left.
    pub(crate) fn successor(&self, position: usize, pattern: &Pattern) -> Option<Self> {
        let next_index = self.indices.get(position)? + 1;
        let symbol = pattern.symbol(next_index)?;
        let cost = pattern.cost(next_index)?;

        let mut indices = self.indices.clone();
        let mut symbols = self.symbols.clone();
        let mut costs = self.costs.clone();
        indices[position] = next_index;
        symbols[position] = symbol;
        costs[position] = cost;

        Some(Self::new(symbols, costs, indices))
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Sum of the per-position costs
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sum of the per-position indices
    pub fn index_sum(&self) -> usize {
        self.index_sum
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
