//! Terminal rendering for each subcommand.

pub mod breakdown;
pub mod summary;
pub mod ui;
pub mod upcoming;
