//! Shared glue for the sample-corpus binaries.

pub mod common;
