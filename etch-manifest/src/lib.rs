//! Configuration for the etch source generator.
//!
//! Two files drive a generation run:
//!
//! - `etch.toml` ([`Manifest`]) names the marker, picks the emission
//!   [`Strategy`] and optionally declares the [`ClassTemplate`] to generate.
//! - `rounds.toml` ([`RoundsFile`]) is the declaration feed, standing in for
//!   the host toolchain's discovery rounds.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod rounds;

pub use error::{Document, Error, Result};
pub use manifest::{
    ClassTemplate, DEFAULT_CLASS_NAME, DEFAULT_DOC, EtchToml, FieldTemplate, GeneratorConfig,
    Manifest, MethodTemplate, Strategy,
};
pub use rounds::RoundsFile;
