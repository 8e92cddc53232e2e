mod completions;
mod inspect;
mod module;

use std::path::Path;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use inspect::InspectCommand;
use module::ModuleCommand;
use stone_schema::Config;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stone_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for stone_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the configuration given with `--config`, or `./stone.toml` when present.
fn load_config(path: Option<&Path>) -> stone_schema::Result<Config> {
    match path {
        Some(path) => Config::open(path),
        None => Config::discover("."),
    }
}

#[derive(Parser)]
#[command(name = "stone")]
#[command(version)]
#[command(about = "Generate Angular boilerplate for a data entity")]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Module(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the boilerplate of a new module, one section at a time
    Module(ModuleCommand),

    /// Show the resolved field tree of a module's model
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_module_arguments() {
        let cli = Cli::try_parse_from([
            "stone",
            "-vv",
            "module",
            "product-item",
            "Products",
            "--no-pause",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert!(matches!(cli.command, Commands::Module(_)));
    }
}
