use log::{debug, warn};

use crate::pattern::core::Pattern;
use crate::pattern::errors::PatternError;
use crate::pattern::symbol::{
    ALTERNATIVE_DELIMITER, RANGE_DELIMITER, is_range_symbol, is_symbol,
};

/// Result of compiling a pattern string: the pattern plus every alternative
/// that was skipped along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    pub pattern: Pattern,
    pub skipped: Vec<PatternError>,
}

impl CompiledPattern {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }
}

impl Pattern {
    /// Compile a pattern string such as `"A-C,1-3,?"`.
    ///
    /// Alternatives are separated by `,`. Each is either a single symbol
    /// (digit, uppercase letter or `?`) or a range `X-Y` of digits and
    /// uppercase letters. Ranges run by character code and skip codes that
    /// are not symbols, so `"8-B"` yields `8, 9, A, B`. Symbols keep the order
    /// in which they were declared and the first one is the cheapest.
    ///
    /// Malformed alternatives are logged, recorded in
    /// [`CompiledPattern::skipped`] and otherwise ignored.
    pub fn compile(spec: &str) -> CompiledPattern {
        debug!("Compiling pattern '{}'", spec);

        let mut symbols = Vec::new();
        let mut skipped = Vec::new();

        for alternative in spec.split_terminator(ALTERNATIVE_DELIMITER) {
            match compile_alternative(alternative) {
                Ok(expanded) => symbols.extend(expanded),
                Err(err) => {
                    warn!("Skipping invalid pattern alternative: {}", err);
                    skipped.push(err);
                }
            }
        }

        if symbols.is_empty() {
            warn!("Pattern '{}' produced no symbols", spec);
        }

        debug!(
            "Compiled pattern '{}' into {} symbols ({} alternatives skipped)",
            spec,
            symbols.len(),
            skipped.len()
        );

        CompiledPattern {
            pattern: Pattern::from_ranked_symbols(symbols),
            skipped,
        }
    }

    /// Compile a pattern string, discarding the skipped-alternative report.
    pub fn parse(spec: &str) -> Pattern {
        Self::compile(spec).into_pattern()
    }
}

fn compile_alternative(alternative: &str) -> Result<Vec<char>, PatternError> {
    let chars: Vec<char> = alternative.chars().collect();

    match chars.as_slice() {
        [single] if is_symbol(*single) => Ok(vec![*single]),
        [first, RANGE_DELIMITER, last] if is_range_symbol(*first) && is_range_symbol(*last) => {
            let expanded: Vec<char> = (*first..=*last).filter(|c| is_range_symbol(*c)).collect();
            if expanded.is_empty() {
                debug!("Range '{}' is reversed and yields no symbols", alternative);
            }
            Ok(expanded)
        }
        [single] => Err(invalid(
            alternative,
            format!("'{}' is not a digit, uppercase letter or '?'", single),
        )),
        [_, RANGE_DELIMITER, _] => Err(invalid(
            alternative,
            "range endpoints must be digits or uppercase letters".to_string(),
        )),
        [] => Err(invalid(alternative, "alternative is empty".to_string())),
        _ => Err(invalid(
            alternative,
            "expected a single symbol or a range like 'A-Z'".to_string(),
        )),
    }
}

fn invalid(alternative: &str, reason: String) -> PatternError {
    PatternError::InvalidAlternative {
        alternative: alternative.to_string(),
        reason,
    }
}
