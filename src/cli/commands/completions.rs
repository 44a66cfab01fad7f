//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `TodoError::InvalidInput` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);
    String::from_utf8(buf).map_err(|e| TodoError::InvalidInput(format!("UTF-8 error: {e}")))
}
