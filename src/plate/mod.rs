//! Plate module: one selected symbol per pattern position

mod core;
mod display;
mod score;

pub use self::core::Plate;
pub use score::symbol_sum_score;
