mod core;
mod errors;
mod limit;

pub use self::core::PlateGenerator;
pub use errors::GeneratorError;
pub use limit::MaxResults;

#[cfg(test)]
mod tests;
