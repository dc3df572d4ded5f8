//! Loaders and writers for near-Earth object and close-approach data.
//!
//! This crate provides:
//! - CSV loading of the NEO catalog and JSON loading of close-approach data
//!   into `neodb-model` records, with strict and permissive modes
//! - CSV and nested-JSON output of query results from `neodb-store`
//!
//! ## Quick Start
//!
//! ```no_run
//! use neodb_io::{load_approaches, load_bodies, write_results, ReadMode};
//! use neodb_store::{Criteria, Store};
//!
//! let bodies = load_bodies("data/neos.csv", ReadMode::Strict)?;
//! let approaches = load_approaches("data/cad.json", ReadMode::Strict)?;
//! let store = Store::new(bodies, approaches);
//!
//! let filters = Criteria {
//!     hazardous: Some(true),
//!     ..Criteria::default()
//! }
//! .into_filters();
//! write_results(store.query(&filters), "hazardous.json")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Error types for loading and writing.
pub mod errors;
/// NEO catalog and close-approach loaders.
pub mod extract;
/// Result writers.
pub mod write;

pub use errors::DataError;
pub use extract::{load_approaches, load_bodies, read_approaches, read_bodies, ReadMode};
pub use write::{
    write_csv_file, write_json_file, write_results, write_to_csv, write_to_json, CSV_FIELDS,
};
