use std::path::PathBuf;

use clap::{Parser, Subcommand};

use flight_oracle::config::{load_config, OracleConfig};
use flight_oracle::oracle::{handle_request, FlightClient, OracleRequest};
use flight_oracle::{http, observability};

#[derive(Parser)]
#[command(name = "flight-oracle")]
#[command(about = "Flight status oracle backed by the aviationstack API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one flight by IATA code and print the result envelope
    Lookup {
        /// IATA flight code, e.g. "AA100"
        flight_id: String,
    },
    /// Serve the oracle over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => OracleConfig::default(),
    };

    observability::logging::init(&config.observability.log_filter);

    match cli.command {
        Commands::Lookup { flight_id } => {
            let client = FlightClient::new(config.upstream.clone())?;
            let request = OracleRequest {
                data: vec![flight_id],
            };
            // Failures stay inside the envelope; the command itself succeeds.
            let envelope = handle_request(&client, &request).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Serve => {
            http::serve(config).await?;
        }
    }

    Ok(())
}
