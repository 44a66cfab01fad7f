//! Config command implementation.

use std::path::Path;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::TodoError;
use crate::output::to_json;

/// Execute config subcommands against the config file at `path`.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, serialized or written.
pub fn config(
    path: &Path,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(path)?;
            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => serde_yaml::to_string(&config)
                    .map(|yaml| format!("# {}\n{}", path.display(), yaml.trim_end()))
                    .map_err(|e| TodoError::Config(format!("Failed to serialize config: {e}"))),
            }
        },
        ConfigCommands::Init => {
            if path.exists() {
                return Ok(format!("Config already exists: {}", path.display()));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TodoError::Config(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            Config::default().save_to_path(path)?;
            Ok(format!("Wrote default config: {}", path.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_show() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".todofile").join("config.yaml");

        let output = config(&path, ConfigCommands::Init, OutputFormat::Pretty).unwrap();
        assert!(output.starts_with("Wrote default config"));
        assert!(path.exists());

        let output = config(&path, ConfigCommands::Init, OutputFormat::Pretty).unwrap();
        assert!(output.starts_with("Config already exists"));

        let output = config(&path, ConfigCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["general"]["file"], "TODO");
        assert_eq!(value["list"]["sort_by_priority"], true);
    }
}
