//! Core types, errors, and utilities for the ftally tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`TallyConfig`], [`GroupBy`] and [`SortOrder`] for run configuration
//! - [`ConfigError`] for invalid configuration
//! - Type aliases for `FxHashMap` (faster than std for string keys)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;

pub use config::{GroupBy, SortOrder, TallyConfig};
pub use error::ConfigError;
pub use hash::{FxHashMap, fx_hash_map};
