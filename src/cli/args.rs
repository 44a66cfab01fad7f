use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Keep TODO records in a plain-text file")]
#[command(long_about = "todo - plain-text TODO records

Reads, adds and removes records in a TODO file of the form:

  TODO:<priority> \"<title>\" {{
  <optional description>
  }}

QUICK START:
  todo                          List records from ./TODO
  todo add \"Buy milk\" -p 2      Add a record with priority 2
  todo rm \"Buy milk\"            Remove a record
  todo check                    Validate the file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Record file to operate on
    ///
    /// Defaults to the file named in the config, or `TODO` in the
    /// current directory.
    #[arg(short, long, env = "TODO_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file to use instead of ~/.todofile/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records (the default command)
    ///
    /// # Examples
    ///
    ///   todo list                 Sorted by priority
    ///   todo list -p=0 -t=1       Sorted by title only
    ///   todo list -l 2            Only priority 2
    #[command(alias = "ls")]
    List(ListArgs),

    /// Append a new record
    ///
    /// Backslash escapes (\n, \t, \r, \\, \") in the title and description
    /// are resolved unless --raw is given.
    ///
    /// # Examples
    ///
    ///   todo add "Buy milk"
    ///   todo add "Call mom" -p 1 -d "about the weekend\nbring cake"
    #[command(alias = "a")]
    Add(AddArgs),

    /// Remove the record with the given title
    #[command(alias = "rm")]
    Remove {
        /// Exact title of the record
        title: String,
    },

    /// Validate the record file and report how many records it holds
    Check,

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   todo completions bash > /usr/local/etc/bash_completion.d/todo
    ///   todo completions zsh > ~/.zsh/completions/_todo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Sort by priority (1) or not (0)
    #[arg(short = 'p', long = "priority", value_name = "0|1", value_parser = BoolishValueParser::new())]
    pub sort_by_priority: Option<bool>,

    /// Sort by title (1) or not (0)
    #[arg(short = 't', long = "title", value_name = "0|1", value_parser = BoolishValueParser::new())]
    pub sort_by_title: Option<bool>,

    /// Show only records with this priority (0 shows all)
    #[arg(short, long, value_name = "N")]
    pub level: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Record title
    pub title: String,

    /// Priority, greater than 0
    #[arg(short, long, default_value_t = 1)]
    pub priority: i64,

    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Store title and description without resolving escapes
    #[arg(long)]
    pub raw: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file if none exists
    Init,
}
