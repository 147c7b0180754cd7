//! CLI layer: argument definitions and command execution

pub mod args;
pub mod commands;
