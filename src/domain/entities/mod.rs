//! Core domain entities representing the business data model.
//!
//! The service persists a single entity, [`Link`]. Writes go through separate
//! input structs:
//! - [`NewLink`] - insert step (no short code yet)
//! - [`LinkUpdate`] - update step attaching the short code
//! - [`LinkFilter`] - single-record lookup by id and/or short code

pub mod link;

pub use link::{DEFAULT_OWNER_ID, Link, LinkFilter, LinkUpdate, NewLink};
