//! # Orderdesk
//!
//! Prices an order batch and reports low stock.
//!
//! ## Usage
//! ```bash
//! # Price a batch with default rules
//! cargo run -p orderdesk-cli -- batch.json
//!
//! # Include rejected orders, custom threshold
//! cargo run -p orderdesk-cli -- --detailed --threshold 5 batch.json
//!
//! # Gross-subtotal tax, verbose logs
//! ORDERDESK_TAX_BASIS=gross RUST_LOG=debug cargo run -p orderdesk-cli -- batch.json
//! ```

use std::process::ExitCode;

use orderdesk_cli::{CliArgs, Command, OrderdeskConfig, USAGE};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    let config = match OrderdeskConfig::load(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.filter);
    info!(
        source = ?config.source,
        tax_base = %config.pricing.tax_base,
        tax_rate = %config.pricing.tax_rate,
        low_stock_threshold = config.pricing.low_stock_threshold,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    match orderdesk_cli::run(&args, &config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Batch run failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
