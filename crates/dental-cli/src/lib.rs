//! CLI library components for the dental chart tool.

pub mod commands;
pub mod logging;
pub mod render;
