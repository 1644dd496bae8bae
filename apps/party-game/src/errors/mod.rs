//! Error types shared across the crate.

pub mod domain;
