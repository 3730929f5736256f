//! Pure helper functions used by the application layer.
//!
//! - [`base62`] - Short code encoding from record ids
//! - [`url_normalizer`] - Scheme normalization of original URLs

pub mod base62;
pub mod url_normalizer;
