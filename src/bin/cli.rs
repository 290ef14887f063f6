//! smckit CLI
//!
//! Reads hardware sensor values over the SMC protocol.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// smckit CLI
#[derive(Parser, Debug)]
#[command(name = "smckit-cli")]
#[command(about = "Read hardware sensor values over the SMC protocol")]
#[command(version)]
struct Args {
    /// SMC service name to connect to
    #[arg(long, default_value = "AppleSMC")]
    service: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a temperature sensor by key (prints degrees Celsius)
    Read {
        /// The 4-character sensor key (e.g. TC0P)
        key: String,
    },

    /// Show size/type metadata for a key
    Info {
        /// The 4-character sensor key
        key: String,
    },

    /// List the well-known sensor keys
    Keys,
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,smckit=debug"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    // The key listing is pure data; no connection needed
    if matches!(args.command, Commands::Keys) {
        for (key, label) in smckit::keys::ALL {
            println!("{key}  {label}");
        }
        return;
    }

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_os = "macos")]
fn run(args: &Args) -> smckit::Result<()> {
    use smckit::{Config, SmcClient, SmcKey};

    let config = Config::builder().service_name(&args.service).build();
    let mut client = SmcClient::open_with(&config)?;

    match &args.command {
        Commands::Read { key } => {
            let value = client.read_temperature(key);
            println!("{key}: {value:.1} C");
        }
        Commands::Info { key } => {
            let key = SmcKey::new(key)?;
            let info = client.query_key_info(key)?;
            println!(
                "{key}: size={} type={} attributes={:#04x}",
                info.data_size,
                info.data_type_display(),
                info.data_attributes,
            );
        }
        Commands::Keys => unreachable!("handled before opening a connection"),
    }

    client.close();
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run(args: &Args) -> smckit::Result<()> {
    // The hardware-management service only exists on macOS hosts
    Err(smckit::SmcError::ServiceNotFound(args.service.clone()))
}
