// src/lib.rs

//! # country-explorer
//!
//! Workspace crate that re-exports [`explorer_core`] so the demos under
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example search_history
//! ```
pub use explorer_core::*;
