//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - Identifier rules and reserved words for a target language

mod naming;

pub use naming::NamingConvention;
