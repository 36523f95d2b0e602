//! Listing search for a peer-to-peer rental marketplace.
//!
//! The [`filter`] module is the pure core: price/category filtering, a
//! conflict-aware tag relevance check and locality ordering. [`source`]
//! loads listings from the marketplace API or a local file.

pub mod config;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod source;
