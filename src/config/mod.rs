//! Configuration management for todofile.
//!
//! This module handles loading and saving configuration from `~/.todofile/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ListConfig};
