use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod audit_csv;
mod commands;

use fairline_core::ConfigLoader;

#[derive(Parser)]
#[command(name = "fairline")]
#[command(about = "Positive-EV scanner across sportsbooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a league for positive-EV prices at one sportsbook
    Scan {
        /// Free token list: <sport> <league> <reference book> <target book>
        #[arg(num_args = 0.., value_name = "TOKEN")]
        tokens: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::load()?;

    match cli.command {
        Commands::Scan { tokens } => {
            let output = commands::scan(&tokens, &config).await?;
            println!("{output}");
        }
    }

    Ok(())
}
