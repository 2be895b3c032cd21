use std::fmt;

use crate::plate::core::Plate;

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
