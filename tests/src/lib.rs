//! Shared harness for VenueLens endpoint tests.

pub mod fixtures;
