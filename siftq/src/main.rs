//! siftq: parse and check sift search terms from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "siftq")]
#[command(about = "Parse query-parameter expressions into validated search terms")]
#[command(version)]
struct Cli {
    /// Config file (default: $SIFT_CONFIG or the platform config dir)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one column/argument pair and print the term as JSON
    #[command(visible_alias = "p")]
    Parse {
        /// Model whose column catalog to use
        #[arg(short = 'm', long = "model")]
        model: String,

        /// Column name (e.g. id, age, user.name)
        column: String,

        /// Argument with operator and values (e.g. ">=10;20")
        argument: String,
    },

    /// List operators in match order
    Operators,

    /// Validate the configuration
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Parse { model, column, argument } => {
            commands::parse(config, &model, &column, &argument)
        }
        Commands::Operators => commands::operators(config),
        Commands::Check => commands::check(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
