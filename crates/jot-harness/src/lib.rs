//! Batch invocation harness for the jot sample corpus.
//!
//! Walks a directory tree for matching source files and runs an external
//! tool over each one, strictly sequentially, tallying the outcome of
//! every invocation in a [`RunSummary`].

pub mod discover;
pub mod error;
pub mod harness;
pub mod workdir;

pub use discover::SourceFiles;
pub use error::DiscoveryError;
pub use harness::{Harness, InvocationFailure, InvocationSpec, RunSummary};
