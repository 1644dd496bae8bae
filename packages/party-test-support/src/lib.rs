//! Test support utilities for the party game workspace
//!
//! Shared between the crate's unit tests and its integration test binaries
//! so both initialize logging the same way.

pub mod test_logging;
