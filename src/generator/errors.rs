use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Pattern {position} is invalid: {source}")]
    Pattern {
        position: usize,
        #[source]
        source: PatternError,
    },
    #[error("Pattern {position} ('{spec}') has no symbols")]
    EmptyPattern { position: usize, spec: String },
}
