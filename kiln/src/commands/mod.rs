mod completions;
mod init;
mod list;
mod make;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;
use make::MakeCommand;
use miette::Diagnostic;

use crate::logging;

/// Print a diagnostic with miette's formatting and exit with status 1.
pub(crate) fn exit_with_diagnostic<D>(diagnostic: D) -> !
where
    D: Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(diagnostic));
    std::process::exit(1);
}

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_diagnostic(*e),
        }
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Scaffold Laminas PHP inputs, input filters and services")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init_logging(self.verbose, self.quiet)?;

        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Make(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a kiln.toml in the project root
    Init(InitCommand),

    /// Generate a PHP artifact in a module
    Make(MakeCommand),

    /// List the artifact kinds kiln can generate
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
