//! Plategen - enumerate license plates in ascending cost order
//!
//! A plate picks one symbol from each of several independent patterns. This
//! library compiles pattern strings such as `"A-Z"` or `"0-9,?"` into ranked
//! symbol sets and walks their Cartesian product cheapest first, without
//! materialising the product and without producing any plate twice.

pub mod engine;
pub mod generator;
pub mod pattern;
pub mod plate;

// Re-export the main public API
pub use generator::{GeneratorError, MaxResults, PlateGenerator};
pub use pattern::{CompiledPattern, Pattern, PatternError};
pub use plate::{Plate, symbol_sum_score};

/// Generate the cheapest plates for a list of pattern strings.
///
/// This is a convenience function that builds a one-off [`PlateGenerator`].
/// Invalid alternatives in a pattern are skipped with a warning.
///
/// # Arguments
///
/// * `specs` - One pattern string per plate position
/// * `max` - How many plates to return
///
/// # Examples
///
/// ```
/// use plategen::{MaxResults, generate_plates};
///
/// let plates = generate_plates(&["0-1", "A-B"], MaxResults::All);
/// let rendered: Vec<String> = plates.iter().map(|p| p.to_string()).collect();
/// assert_eq!(rendered, ["0A", "0B", "1A", "1B"]);
/// ```
pub fn generate_plates<S: AsRef<str>>(specs: &[S], max: MaxResults) -> Vec<Plate> {
    PlateGenerator::from_specs(specs).generate(max)
}
