use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use ofen_rs::{init_logger, log_info, HttpTransport, OfenClient, OfenError};

#[derive(Parser)]
#[command(name = "ofen-cli")]
#[command(about = "CLI tool for the Ofen Innovativ fireplace protocol")]
struct Cli {
    /// Fireplace controller host, e.g. 192.168.1.40
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the current fireplace state
    State,
    /// Read the controller's system date/time
    Datetime,
    /// Set the controller's system date/time
    SetDatetime {
        /// New date/time, e.g. 2026-08-25T09:30:00
        to: NaiveDateTime,
    },
    /// Read the controller's network status
    IpStatus,
}

#[tokio::main]
async fn main() -> Result<(), OfenError> {
    init_logger();

    let cli = Cli::parse();
    let client = OfenClient::new(HttpTransport::new(&cli.host));

    match cli.command {
        Commands::State => {
            let state = client.retrieve_fireplace_state().await?;
            log_info(&format!("{state:?}"));
        }
        Commands::Datetime => {
            let info = client.retrieve_system_datetime().await?;
            log_info(&format!(
                "system datetime: {} (source {})",
                info.datetime, info.source
            ));
        }
        Commands::SetDatetime { to } => {
            let confirmation = client.set_system_datetime(&to).await?;
            log_info(&format!("datetime set, confirmation: {confirmation:02x?}"));
        }
        Commands::IpStatus => {
            let status = client.retrieve_ip_status().await?;
            log_info(&format!("MAC address: {}", status.mac_address));
        }
    }

    Ok(())
}
