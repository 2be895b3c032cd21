use crate::plate::core::Plate;

/// Sum the symbols of a plate: digits count their face value and letters
/// count their alphabet position (`A` is 1, `Z` is 26). The wildcard adds
/// nothing.
pub fn symbol_sum_score(plate: &Plate) -> f64 {
    plate
        .symbols()
        .iter()
        .map(|&symbol| match symbol {
            '0'..='9' => f64::from(symbol as u8 - b'0'),
            'A'..='Z' => f64::from(symbol as u8 - b'A' + 1),
            _ => 0.0,
        })
        .sum()
}
