use std::convert::Infallible;

use log::{debug, info};

use crate::engine::FrontierEngine;
use crate::generator::errors::GeneratorError;
use crate::generator::limit::MaxResults;
use crate::pattern::Pattern;
use crate::plate::Plate;

/// Query surface over the plates of a fixed pattern list, cheapest first.
///
/// Every query shares one cache, so asking for more plates later only
/// computes the ones not produced yet. Queries take `&mut self`; callers
/// sharing a generator across threads must wrap it in a lock.
#[derive(Debug, Clone)]
pub struct PlateGenerator {
    engine: FrontierEngine,
}

impl PlateGenerator {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self {
            engine: FrontierEngine::new(patterns),
        }
    }

    /// Compile each spec leniently: invalid alternatives are skipped and a
    /// spec with no symbols makes the product empty.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Self {
        Self::new(
            specs
                .iter()
                .map(|spec| Pattern::parse(spec.as_ref()))
                .collect(),
        )
    }

    /// Compile each spec, rejecting any invalid alternative or empty pattern.
    ///
    /// # Errors
    ///
    /// Returns the first skipped alternative or the first spec that yields
    /// no symbols, tagged with its position.
    pub fn try_from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, GeneratorError> {
        let mut patterns = Vec::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            let compiled = Pattern::compile(spec.as_ref());
            if let Some(source) = compiled.skipped.into_iter().next() {
                return Err(GeneratorError::Pattern { position, source });
            }
            if compiled.pattern.is_empty() {
                return Err(GeneratorError::EmptyPattern {
                    position,
                    spec: spec.as_ref().to_string(),
                });
            }
            patterns.push(compiled.pattern);
        }
        Ok(Self::new(patterns))
    }

    pub fn patterns(&self) -> &[Pattern] {
        self.engine.patterns()
    }

    /// Number of plates in the product, saturating at `u64::MAX`.
    pub fn count(&self) -> u64 {
        self.engine.count()
    }

    /// Number of plates in the product, or `None` if it overflows a `u64`.
    pub fn count_exact(&self) -> Option<u64> {
        self.engine.count_exact()
    }

    /// Number of plates computed and cached so far.
    pub fn cached_len(&self) -> usize {
        self.engine.cached().len()
    }

    /// The cheapest `max` plates in ascending cost order. Ties are broken by
    /// index vector.
    ///
    /// The returned list is a copy; changing it does not affect later calls.
    pub fn generate(&mut self, max: MaxResults) -> Vec<Plate> {
        self.prefix(max).to_vec()
    }

    /// Call `on_each` for each of the cheapest `max` plates, in order.
    pub fn visit<F>(&mut self, max: MaxResults, mut on_each: F)
    where
        F: FnMut(&Plate),
    {
        let visited: Result<(), Infallible> = self.try_visit(max, |plate| {
            on_each(plate);
            Ok(())
        });
        match visited {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Like [`visit`](Self::visit), stopping at the first error `on_each`
    /// returns.
    ///
    /// Plates are produced one at a time as the callback asks for them, so
    /// an early error on a huge product stops enumeration right there.
    ///
    /// # Errors
    ///
    /// Propagates the callback's error unchanged.
    pub fn try_visit<F, E>(&mut self, max: MaxResults, mut on_each: F) -> Result<(), E>
    where
        F: FnMut(&Plate) -> Result<(), E>,
    {
        let wanted = max.resolve(self.count());
        let mut position: u64 = 0;
        while position < wanted {
            let available = self.engine.ensure(position + 1);
            let Some(plate) = usize::try_from(position)
                .ok()
                .filter(|&index| index < available)
                .and_then(|index| self.engine.cached().get(index))
            else {
                break;
            };
            on_each(plate)?;
            position += 1;
        }
        debug!("Visited {} of {} requested plates", position, wanted);
        Ok(())
    }

    /// Score each of the cheapest `max` plates and return every plate tied at
    /// the lowest score.
    ///
    /// Only that cost-ranked prefix is searched: a better-scoring plate
    /// further down the order is not considered. NaN scores are ignored.
    pub fn find_best_by_score<F>(&mut self, max: MaxResults, mut score: F) -> Vec<Plate>
    where
        F: FnMut(&Plate) -> f64,
    {
        let mut best_score: Option<f64> = None;
        let mut best = Vec::new();

        for plate in self.prefix(max) {
            let value = score(plate);
            if value.is_nan() {
                debug!("Ignoring NaN score for plate '{}'", plate);
                continue;
            }

            match best_score {
                Some(current) if value > current => {}
                Some(current) if value == current => best.push(plate.clone()),
                _ => {
                    best_score = Some(value);
                    best.clear();
                    best.push(plate.clone());
                }
            }
        }

        info!(
            "Found {} plates with best score {:?}",
            best.len(),
            best_score
        );
        best
    }

    fn prefix(&mut self, max: MaxResults) -> &[Plate] {
        let wanted = max.resolve(self.count());
        let available = self.engine.ensure(wanted);
        debug!("Serving {} of {} requested plates", available, wanted);
        self.engine.cached().get(..available).unwrap_or_default()
    }
}
