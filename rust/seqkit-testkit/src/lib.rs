//! Test utilities and helpers for the seqkit crates.
//!
//! This crate provides:
//! - Probe sources that record how often they were pulled and dropped, and that
//!   can be told to panic when touched past a given element
//! - Random data generation for randomized operator checks
//!
//! # Usage
//!
//! This crate is intended for use within the seqkit test suites only.

pub mod data_gen;
pub mod probe;

pub use probe::{Probe, ProbeStats};
