//! The generation pipeline.
//!
//! - [`Scanner`] - Selects the declarations tagged with the configured marker
//! - [`Driver`] - Runs one generation pass per round: scan, render, write
//! - [`RoundReport`] / [`RoundFailure`] - Outcome of a round

mod driver;
mod report;
mod scan;

pub use driver::{Driver, DriverConfig};
pub use report::{RoundFailure, RoundReport};
pub use scan::{Scanner, scan};
