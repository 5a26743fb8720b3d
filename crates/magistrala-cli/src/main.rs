//! # Magistrala CLI
//!
//! Service health checks and bootstrap payload encryption helpers.

use anyhow::{Context, Result};
use magistrala_proto::cipher;
use magistrala_sdk::{Sdk, SdkConfig, Service};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "health" => {
            if args.len() < 3 {
                eprintln!("Usage: magistrala health <service>");
                std::process::exit(1);
            }
            let service: Service = args[2].parse()?;
            let sdk = Sdk::new(SdkConfig::from_env()?).context("Failed to initialize SDK")?;
            tracing::info!(%service, "Checking service health");
            let info = sdk
                .health
                .health(service)
                .await
                .with_context(|| format!("Health check of {service} failed"))?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        "encrypt" => {
            if args.len() < 4 {
                eprintln!("Usage: magistrala encrypt <secret> <text>");
                std::process::exit(1);
            }
            let encrypted = cipher::encrypt(&args[3], &args[2]).context("Failed to encrypt")?;
            println!("{encrypted}");
        }
        "decrypt" => {
            if args.len() < 4 {
                eprintln!("Usage: magistrala decrypt <secret> <hex>");
                std::process::exit(1);
            }
            let decrypted = cipher::decrypt(&args[3], &args[2]).context("Failed to decrypt")?;
            println!("{decrypted}");
        }
        "help" | "--help" | "-h" => {
            print_help();
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            print_help();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"Magistrala CLI

USAGE:
    magistrala <COMMAND> [OPTIONS]

COMMANDS:
    health <service>          Check the /health endpoint of a service
    encrypt <secret> <text>   Encrypt a bootstrap payload (hex IV + ciphertext)
    decrypt <secret> <hex>    Decrypt a bootstrap payload
    help                      Show this help message

SERVICES:
    users clients channels domains groups certs bootstrap reader
    http-adapter journal invitations pats rules reports alarms

ENVIRONMENT:
    MG_<SERVICE>_URL    Base URL per service, e.g. MG_USERS_URL
    MG_TIMEOUT_SECS     Request timeout in seconds (default 30)
    RUST_LOG            Log filter (default info)

EXAMPLES:
    magistrala health users
    magistrala encrypt "bootstrap-crypto-key" "external-key"
"#
    );
}
