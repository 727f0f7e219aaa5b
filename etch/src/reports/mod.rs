//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an
//! [`Output`](output::Output) target.

mod check;
mod output;
mod run;

pub use check::{CheckReport, RoundsInfo};
pub use output::{Report, TerminalOutput};
pub use run::{PreviewFile, RoundSummary, RunReport, RunResult};
