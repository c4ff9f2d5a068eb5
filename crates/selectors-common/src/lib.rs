//! Common utilities for the selectors workspace.
//!
//! This crate provides shared infrastructure used by all selector components:
//! - **Warning System** - colored, deduplicated terminal output for lint notices
//!   and recoverable internal failures

pub mod warning;
