//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by every selkit component:
//! - **Warning System** - colored, deduplicated terminal output for suspicious input

pub mod warning;
