//! Core utilities for the etch source generator.
//!
//! This crate owns everything that touches the build tree: the
//! [`OutputArea`] abstraction standing in for the host's generated-sources
//! directory, and [`write_artifact`], which persists one artifact through it.

mod output;
mod writer;

// Output areas
pub use output::{FsOutputArea, MemoryOutputArea, OutputArea, SourceStream};
// Artifact writing
pub use writer::{WriteError, write_artifact};
