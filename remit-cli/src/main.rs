//! Remit CLI
//!
//! Command-line interface for the Remittance API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use remit_client::RemitClient;
use remit_types::{InputMode, TransactionId};

#[derive(Parser)]
#[command(name = "remit")]
#[command(author, version, about = "Remittance API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Remittance API
    #[arg(long, env = "REMIT_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview a transfer without recording it
    Preview {
        /// JPY amount to send (drives the calculation)
        #[arg(long, conflicts_with = "receive")]
        send: Option<i64>,
        /// VND amount the recipient should receive (drives the calculation)
        #[arg(long)]
        receive: Option<i64>,
    },
    /// Record a transfer simulation
    Simulate {
        /// JPY amount to send (drives the calculation)
        #[arg(long, conflicts_with = "receive")]
        send: Option<i64>,
        /// VND amount the recipient should receive (drives the calculation)
        #[arg(long)]
        receive: Option<i64>,
    },
    /// Simulation history operations
    History {
        /// Transaction id; omit to list everything
        id: Option<String>,
    },
    /// Show the current JPY→VND exchange rate
    Rate,
    /// Fee schedule operations
    Fee {
        /// JPY amount to price; omit to print the schedule
        amount: Option<i64>,
    },
    /// Check API health
    Health,
}

/// Maps the --send / --receive pair onto the API's input mode.
fn transfer_args(send: Option<i64>, receive: Option<i64>) -> Result<(InputMode, i64)> {
    match (send, receive) {
        (Some(amount), None) => Ok((InputMode::SourceInput, amount)),
        (None, Some(amount)) => Ok((InputMode::DestInput, amount)),
        _ => anyhow::bail!("pass exactly one of --send (JPY) or --receive (VND)"),
    }
}

fn parse_transaction_id(s: &str) -> Result<TransactionId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid transaction id: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RemitClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Preview { send, receive } => {
            let (mode, amount) = transfer_args(send, receive)?;
            let quote = client.preview(mode, amount).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }

        Commands::Simulate { send, receive } => {
            let (mode, amount) = transfer_args(send, receive)?;
            let tx = client.simulate(mode, amount).await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }

        Commands::History { id } => match id {
            Some(id) => {
                let tx = client.transaction(parse_transaction_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
            None => {
                let history = client.history().await?;
                println!("{}", serde_json::to_string_pretty(&history)?);
            }
        },

        Commands::Rate => {
            let rate = client.exchange_rate().await?;
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }

        Commands::Fee { amount } => match amount {
            Some(amount) => {
                let fee = client.calculate_fee(amount).await?;
                println!("{}", serde_json::to_string_pretty(&fee)?);
            }
            None => {
                let structure = client.fee_structure().await?;
                println!("{}", serde_json::to_string_pretty(&structure)?);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_selects_source_input() {
        let (mode, amount) = transfer_args(Some(10_000), None).unwrap();
        assert_eq!(mode, InputMode::SourceInput);
        assert_eq!(amount, 10_000);
    }

    #[test]
    fn receive_selects_dest_input() {
        let (mode, amount) = transfer_args(None, Some(1_715_000)).unwrap();
        assert_eq!(mode, InputMode::DestInput);
        assert_eq!(amount, 1_715_000);
    }

    #[test]
    fn neither_side_is_an_error() {
        assert!(transfer_args(None, None).is_err());
        assert!(transfer_args(Some(1), Some(2)).is_err());
    }
}
