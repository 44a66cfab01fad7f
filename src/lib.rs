//! todofile - plain-text TODO record files
//!
//! This crate parses the `TODO:<priority> "<title>" {{<description>}}`
//! record format, reports malformed input with caret diagnostics, and
//! adds or removes records in the backing file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod store;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::Todo;
pub use error::TodoError;
pub use parser::{parse, ParseError};
pub use store::TodoFile;
