//! Utility modules

pub mod memory_storage;
pub mod parsing;
pub mod validation;

pub use memory_storage::*;
pub use parsing::*;
pub use validation::*;
