//! Subcommand implementations.

pub mod defaults;
pub mod plot;
pub mod report;
pub mod validate;
