//! Shared test utilities for the storm-track workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Canned HURDAT2 text fixtures covering the dataset shapes the parser
//!   and analysis crates care about
//! - Generators that assemble well-formed header and data lines from parts
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
