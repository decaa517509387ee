#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rate map server binary.
//!
//! ```text
//! rate_map_server [serve] [--bind ADDR] [--port PORT] [--data PATH]
//! rate_map_server interactive
//! rate_map_server summary [--data PATH]
//! ```
//!
//! Running with no subcommand is the same as `serve`. Flags override the
//! `BIND_ADDR`, `PORT`, and `RATES_CSV` environment variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rate_map_server::{ServerConfig, load_store};

#[derive(Parser)]
#[command(
    name = "rate_map_server",
    about = "Serve the interactive state suicide-rate map"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// Rates CSV (.csv or .csv.gz)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Prompt for configuration, then start the server
    Interactive,
    /// Load the dataset and print a short summary
    Summary {
        /// Rates CSV (.csv or .csv.gz)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;

    match cli.command {
        None => {
            actix_rt::System::new().block_on(rate_map_server::run_server(config))?;
        }
        Some(Commands::Serve { bind, port, data }) => {
            let config = config.with_overrides(bind, port, data);
            actix_rt::System::new().block_on(rate_map_server::run_server(config))?;
        }
        Some(Commands::Interactive) => {
            actix_rt::System::new().block_on(rate_map_server::interactive::run(config))?;
        }
        Some(Commands::Summary { data }) => {
            let config = config.with_overrides(None, None, data);
            let store = load_store(&config)?;
            let years = store.year_range();

            println!("Dataset: {}", config.data_path.display());
            println!("Years:   {}-{}", years.first(), years.last());
            println!("States:  {}", store.states().len());
            if let Some(rate) = store.national_rate(years.last()) {
                println!("U.S. average ({}): {rate:.1} per 100k", years.last());
            }
        }
    }

    Ok(())
}
