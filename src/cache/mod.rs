//! Cache module for storing resolved words on disk
//!
//! This module defines the `CacheStore` contract used by the lookup flow and a
//! file-backed implementation that persists the whole search-term mapping as a
//! single JSON object. Corrupt cache files are reset to an empty mapping with a
//! warning rather than failing the lookup.

mod manager;

pub use manager::{Cache, CacheManager, CacheStore};
