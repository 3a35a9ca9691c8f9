//! Card catalog loading
//!
//! Reads the MTG JSON catalog and keeps it for the rest of the run

pub mod catalog;
pub mod context;

pub use catalog::{Catalog, SetInfo};
pub use context::{CatalogContext, CatalogSource};
