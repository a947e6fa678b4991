//! Array state and generation.
//!
//! ## Submodules
//!
//! - [`array`]: the array under visualization and its generation settings
//! - [`generator`]: random generation with clamped bounds

pub mod array;
pub mod generator;

pub use array::{ArrayState, GenSettings};
