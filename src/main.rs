mod cli;
mod config;

use cli::Cli;
use config::Config;
use location_stub::{HarnessError, StubServer, mount_location_stubs};
use std::process;
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), HarnessError> {
    // Parse command line arguments
    let cli = Cli::parse_args();
    let config = Config::from_cli(cli)?;

    // Set up logging if verbose mode is enabled
    if config.verbose {
        setup_logging();
    }

    let store = config.store();
    let record = store.load_record()?;
    eprintln!(
        "Loaded fixture record for {} (id {}, cost {})",
        record.location_name, record.id, record.cost
    );

    // Bind the listener, then install the stub set
    let server = match config.port {
        Some(port) => StubServer::start_on_port(port).await?,
        None => StubServer::start().await,
    };
    mount_location_stubs(&server, &store).await?;

    eprintln!("Location stub server listening on {}", server.uri());
    eprintln!("Unmatched requests answer 404");

    // Wait for shutdown signal
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    eprintln!("\nShutdown signal received, stopping server...");

    // Dropping the server releases the port
    drop(server);
    eprintln!("Server stopped gracefully.");

    Ok(())
}

fn setup_logging() {
    use std::env;

    // Set log level if not already set
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
