//! Entity records for near-Earth objects (NEOs) and their close approaches.
//!
//! These types are produced by the loaders in `neodb-io` and owned by the
//! `Store` in `neodb-store`. Links between the two record kinds are plain
//! index identifiers ([`BodyId`], [`EventId`]); the store owns both
//! collections and resolves the links once, at construction.
//!
#![deny(missing_docs)]

/// Close-approach event records.
pub mod approach;
/// Near-Earth object records.
pub mod body;
/// Designation newtype and index identifiers.
pub mod identifiers;
/// Timestamp parsing and formatting in the close-approach data conventions.
pub mod time;
/// Validation errors and field coercion helpers.
pub mod validation;

pub use approach::ApproachEvent;
pub use body::Body;
pub use identifiers::{canonical_key, BodyId, Designation, EventId};
pub use time::{cd_to_datetime, datetime_to_str};
pub use validation::{parse_number, ValidationError};
