//! MTG JSON to Magic Set Editor converter
//!
//! Turns card records from the MTG JSON catalog into a Magic Set Editor set
//! file: an ordered `key: value` data file packed as the `set` entry of a zip
//! archive.

pub mod core;
pub mod error;
pub mod import;
pub mod loader;
pub mod mse;

pub use error::{MseError, Result};
