//! Rule-based setup classification.

pub mod engine;
pub mod zones;

pub use engine::*;
pub use zones::*;
