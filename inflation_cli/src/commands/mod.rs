//! CLI subcommand implementations.

pub mod adjust;
pub mod invoke;
pub mod rate;
