use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_cli::output::OutputFormat;

mod commands;

use commands::inspect::handle_inspect_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network shortest-path utilities")]
struct Cli {
    /// Path to the JSON road map.
    #[arg(long, env = "ROADNET_MAP", global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two intersections.
    Route {
        /// Starting intersection index.
        #[arg(long = "from")]
        from: usize,
        /// Destination intersection index.
        #[arg(long = "to")]
        to: usize,
    },
    /// Summarize the intersections and roads of the map.
    Inspect,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map_path = cli
        .map
        .context("no road map given; pass --map or set ROADNET_MAP")?;

    match cli.command {
        Command::Route { from, to } => {
            handle_route_command(&map_path, cli.format, &RouteCommandArgs { from, to })
        }
        Command::Inspect => handle_inspect_command(&map_path, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
