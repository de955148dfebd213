//! # Order Desk Driver
//!
//! Places one order from the command line.
//!
//! ```text
//! order-desk order.json        # read the request from a file
//! order-desk < order.json      # or from stdin
//! ```
//!
//! The request is `{ "customer": {...}, "pizza": {...} }`. The outcome is
//! printed to stdout as JSON; logs go to stderr.
//!
//! ## Exit Codes
//! - `0`: order placed
//! - `1`: rejected by validation, sink failure, or a bad request

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tracing::{error, info};

use order_desk::commands::order::{self, OrderRequest};
use order_desk::{init_tracing, ApiError, DeskConfig, LoggingSink, OrderEngine};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "Order desk failed");
            match serde_json::to_string_pretty(&err) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the order was placed.
async fn run() -> Result<bool, ApiError> {
    let config = DeskConfig::from_env();
    info!(store = %config.store_name, "Starting order desk");

    let raw = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    let request: OrderRequest = serde_json::from_str(&raw)?;

    let mut engine = OrderEngine::new(config, Arc::new(LoggingSink));
    let response = order::place_order(&mut engine, &request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.outcome.is_placed())
}
