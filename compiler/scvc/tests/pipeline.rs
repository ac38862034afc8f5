// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end driver tests.
//!
//! Each test lays out `.scv` files in a temporary directory, runs
//! [`scvc::compile`] on them and inspects the header or the error.
//!
//! # Organization
//!
//! - `common/` - Temporary workspace helper
//! - `requires` - Cross-file resolution and deduplication
//! - `output` - Output naming, merging and determinism
//! - `diagnostics` - Errors and how they render
//!
//! ```bash
//! cargo test -p scvc --test pipeline
//! ```

#[path = "pipeline/common/mod.rs"]
mod common;

#[path = "pipeline/requires.rs"]
mod requires;

#[path = "pipeline/output.rs"]
mod output;

#[path = "pipeline/diagnostics.rs"]
mod diagnostics;
