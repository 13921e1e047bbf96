//! # PPRL Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Stub MPI client and linkage test types
//! └── integration/      # Site-to-TTP flows
//!     ├── encoding_flow.rs
//!     └── pseudonym_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pprl-tests
//!
//! # By category
//! cargo test -p pprl-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
