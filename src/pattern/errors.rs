use thiserror::Error;

/// Errors raised while building a pattern
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Invalid pattern alternative '{alternative}': {reason}")]
    InvalidAlternative { alternative: String, reason: String },
    #[error("Pattern has {symbols} symbols but {costs} costs")]
    LengthMismatch { symbols: usize, costs: usize },
    #[error("Cost at index {index} is not a finite number")]
    NonFiniteCost { index: usize },
    #[error("Cost at index {index} decreases from {previous} to {current}")]
    DecreasingCost {
        index: usize,
        previous: f64,
        current: f64,
    },
}
