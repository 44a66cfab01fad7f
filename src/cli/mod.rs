//! Command-line interface for todofile.

pub mod args;
pub mod commands;
