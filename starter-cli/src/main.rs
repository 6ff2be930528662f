//! Starter CLI - resolve API versions and preview root responses offline

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use starter_core::VersionStrategy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "starter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Header input shared by every command
#[derive(Args)]
struct HeaderArgs {
    /// Raw header value; omit to simulate a request without the header
    value: Option<String>,

    /// Which header the value came from (accept, header)
    #[arg(short, long, default_value = "accept")]
    strategy: VersionStrategy,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the API version a header value selects
    Resolve {
        #[command(flatten)]
        header: HeaderArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the body GET / would return for a header value
    Respond {
        #[command(flatten)]
        header: HeaderArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "starter_cli=debug"
    } else {
        "starter_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Resolve { header, json } => {
            commands::resolve(header.strategy, header.value.as_deref(), json)
        }

        Commands::Respond { header } => {
            commands::respond(header.strategy, header.value.as_deref())
        }
    }
}
