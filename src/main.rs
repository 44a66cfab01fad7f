use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use todofile::cli::args::{Cli, Commands, ListArgs};
use todofile::cli::commands;
use todofile::config::{Config, Paths};
use todofile::error::TodoError;
use todofile::logging;
use todofile::store::TodoFile;

fn main() {
    if let Err(e) = run() {
        if let Some(parse_err) = e.downcast_ref::<TodoError>().and_then(TodoError::as_parse_error) {
            eprintln!("{}", parse_err.render());
        } else {
            eprintln!("{}: {:#}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (config_path, loaded) = match cli.config.clone() {
        Some(path) => {
            let loaded = Config::load_requested(&path);
            (path, loaded)
        },
        None => {
            let path = Paths::default().config_file;
            let loaded = Config::load_from_path(&path);
            (path, loaded)
        },
    };
    let config = loaded.with_context(|| format!("loading {}", config_path.display()))?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let file = TodoFile::new(cli.file.unwrap_or_else(|| config.general.file.clone()));
    tracing::debug!(file = %file.path().display(), ?format, "resolved record file");

    let output = match cli.command.unwrap_or_else(|| Commands::List(ListArgs::default())) {
        Commands::List(args) => {
            let options = commands::view_options(config.list.view_options(), &args);
            commands::list(&file, &options, format)?
        },
        Commands::Add(args) => commands::add(&file, &args, format)?,
        Commands::Remove { title } => commands::remove(&file, &title, format)?,
        Commands::Check => commands::check(&file, format)?,
        Commands::Config { command } => commands::config(&config_path, command, format)?,
        Commands::Completions { shell } => commands::generate_completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
