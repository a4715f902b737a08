//! CLI library components for the LIF layout tools.

pub mod commands;
pub mod logging;
pub mod summary;
