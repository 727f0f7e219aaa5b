//! Language-agnostic generation pipeline for etch.
//!
//! This crate provides the pieces shared by every target language:
//!
//! - [`builder`] - Class model and code building blocks (ClassSpec, CodeBuilder, TypeRef, etc.)
//! - [`language`] - Naming rules used to validate identifiers
//! - [`EmissionStrategy`] - Turns a generation request into a source artifact
//! - [`pipeline`] - Declaration scanning and the round driver
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod language;
pub mod pipeline;
mod strategy;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::GenerateError;
pub use strategy::EmissionStrategy;
