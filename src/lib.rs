//! word-define library
//!
//! Exposes the lookup flow, stores and provider client so the binary and the
//! integration tests share them.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod lookup;
pub mod output;
pub mod storage;

pub use error::DefineError;
