//! Pattern module: per-position symbol sets and the pattern mini-language

mod compiler;
mod core;
mod errors;
mod symbol;

pub use compiler::CompiledPattern;
pub use self::core::Pattern;
pub use errors::PatternError;
pub use symbol::{WILDCARD, is_range_symbol, is_symbol};
