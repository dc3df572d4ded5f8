//! In-memory store joining near-Earth objects with their close approaches.
//!
//! This crate provides:
//! - [`Store`], which owns both collections, indexes bodies by designation and
//!   by name, and links every close approach to its body at construction
//! - A lazy, restartable [`Query`] over close approaches, filtered by any
//!   number of [`ApproachFilter`]s combined with AND
//! - Attribute filters and a [`Criteria`] factory building them from
//!   user-supplied bounds
//!
//! The store is built once and is read-only afterwards, so lookups and
//! queries may run from many threads at once without locking.

#![deny(missing_docs)]

/// Filter construction from user criteria.
pub mod criteria;
/// Close-approach filtering API.
pub mod filter;
/// Store construction, indexes and lookups.
pub mod store;
/// Borrowed approach views and the query iterator.
pub mod view;

pub use criteria::Criteria;
pub use filter::{
    limit, predicate, AndFilter, ApproachFilter, BoxedFilter, Comparison, DateFilter,
    DiameterFilter, DistanceFilter, HazardousFilter, VelocityFilter,
};
pub use store::Store;
pub use view::{Approach, Query};
