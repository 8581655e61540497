use std::env;
use std::error::Error;

use tournament_frontend::config::Config;
use tournament_frontend::shell::AppShell;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Structured JSON logs; RUST_LOG overrides the default level
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let config = Config::from_env()?;
    let path = env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let shell = AppShell::from_config(&config, &path)?;
    info!(location = shell.location(), url = %config.collection_url(), "Refreshing tournaments");

    let outcome = shell.refresh().await;
    match &outcome.error {
        Some(e) => error!(error = %e, "Tournament refresh failed"),
        None => info!(count = shell.store().snapshot().items.len(), "Tournament refresh complete"),
    }

    println!("{}", shell.render());
    Ok(())
}
