pub mod core;
pub(crate) mod frontier;
pub(crate) mod state;

pub use self::core::FrontierEngine;
