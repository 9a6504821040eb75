mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use buildgraph_lib::consts::DEFAULT_DOCUMENT_FILENAME;

use crate::cmd::{cmd_show, cmd_targets, cmd_top};
use crate::output::print_error;

/// bgraph - inspect build target documents
#[derive(Parser)]
#[command(name = "bgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to the target document
  #[arg(short, long, global = true, default_value = DEFAULT_DOCUMENT_FILENAME)]
  file: PathBuf,

  /// Print JSON instead of text
  #[arg(long, global = true)]
  json: bool,

  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List every target in declaration order
  Targets,

  /// List the top-level targets (dependencies of the DOCUMENT target)
  Top,

  /// Show a single target by id or name
  Show {
    /// Target id or name
    target: String,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match &cli.command {
    Commands::Targets => cmd_targets(&cli.file, cli.json),
    Commands::Top => cmd_top(&cli.file, cli.json),
    Commands::Show { target } => cmd_show(&cli.file, target, cli.json),
  };

  if let Err(e) = result {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}
