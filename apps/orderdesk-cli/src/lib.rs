//! # orderdesk-cli
//!
//! Thin front end over orderdesk-core: loads configuration and a batch
//! file, runs the processor, and prints a JSON report.
//!
//! ## Run Flow
//! ```text
//! args ──► CliArgs::parse
//!            │
//!            ▼
//!        OrderdeskConfig::load ──► init tracing (stderr)
//!            │
//!            ▼
//!        BatchFile::load ──► OrderProcessor::with_policy ──► Report::build
//!                                                              │
//!                                                              ▼
//!                                                        stdout (JSON)
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

use orderdesk_core::OrderProcessor;
use tracing::info;

pub use batch::BatchFile;
pub use config::OrderdeskConfig;
pub use error::{CliError, CliResult};
pub use report::Report;

pub const USAGE: &str = "\
Orderdesk - bulk order pricing and low-stock report

Usage: orderdesk [OPTIONS] <BATCH.json>

Options:
  -c, --config <PATH>     Config file (default: platform config dir)
  -t, --threshold <N>     Low-stock threshold (default: from config, 10)
  -d, --detailed          Include rejected orders with reasons
      --compact           Print compact JSON
  -h, --help              Show this help message";

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub batch_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub threshold: Option<i64>,
    pub detailed: bool,
    pub compact: bool,
}

/// What the process should do after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> CliResult<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut batch_path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{} requires a path", arg)))?;
                    parsed.config_path = Some(PathBuf::from(value));
                }
                "--threshold" | "-t" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{} requires a number", arg)))?;
                    let threshold = value.parse::<i64>().map_err(|_| {
                        CliError::Usage(format!("invalid threshold '{}'", value))
                    })?;
                    parsed.threshold = Some(threshold);
                }
                "--detailed" | "-d" => parsed.detailed = true,
                "--compact" => parsed.compact = true,
                "--help" | "-h" => return Ok(Command::Help),
                other if other.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown option '{}'", other)));
                }
                _ => {
                    if batch_path.replace(PathBuf::from(&arg)).is_some() {
                        return Err(CliError::Usage("only one batch file may be given".into()));
                    }
                }
            }
        }

        parsed.batch_path =
            batch_path.ok_or_else(|| CliError::Usage("missing batch file".into()))?;
        Ok(Command::Run(parsed))
    }
}

// =============================================================================
// Run
// =============================================================================

/// Prices the batch named in `args` and writes the report to `out`.
pub fn run<W: Write>(args: &CliArgs, config: &OrderdeskConfig, out: &mut W) -> CliResult<Report> {
    let batch = BatchFile::load(&args.batch_path)?;
    let processor =
        OrderProcessor::with_policy(&batch.orders, &batch.inventory, config.pricing.clone())?;

    let report = Report::build(&processor, args.detailed, args.threshold);
    info!(
        run_id = %report.run_id,
        priced = report.results.len(),
        orders = batch.orders.len(),
        alerts = report.alerts.len(),
        "Batch processed"
    );

    let rendered = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .map_err(|e| CliError::SerializationFailed(e.to_string()))?;
    writeln!(out, "{}", rendered)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliResult<Command> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_full() {
        let cmd = args(&["-c", "conf.toml", "--threshold", "5", "-d", "batch.json"]).unwrap();
        assert_eq!(
            cmd,
            Command::Run(CliArgs {
                batch_path: PathBuf::from("batch.json"),
                config_path: Some(PathBuf::from("conf.toml")),
                threshold: Some(5),
                detailed: true,
                compact: false,
            })
        );
    }

    #[test]
    fn test_parse_help_and_errors() {
        assert_eq!(args(&["--help"]).unwrap(), Command::Help);
        assert!(matches!(args(&[]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["-t", "ten", "b.json"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["--config"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["--verbose", "b.json"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "b.json"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_run_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "inventory": [
                    {{"sku": "A001", "name": "Widget", "unit_price_cents": 1000, "quantity_on_hand": 100}},
                    {{"sku": "B002", "name": "Gadget", "unit_price_cents": 2500, "quantity_on_hand": 50}},
                    {{"sku": "C003", "name": "Doohickey", "unit_price_cents": 500, "quantity_on_hand": 8}}
                ],
                "orders": [
                    {{"id": 1, "customer_type": "regular", "items": [{{"sku": "A001", "quantity": 2}}]}},
                    {{"id": 2, "customer_type": "vip", "items": [{{"sku": "B002", "quantity": 4}}]}},
                    {{"id": 4, "customer_type": "regular", "items": [{{"sku": "A001", "quantity": 150}}]}},
                    {{"id": 5, "items": [{{"sku": "C003", "quantity": 3}}]}}
                ]
            }}"#
        )
        .unwrap();

        let cli_args = CliArgs {
            batch_path: file.path().to_path_buf(),
            compact: true,
            ..CliArgs::default()
        };
        let mut out = Vec::new();
        let report = run(&cli_args, &OrderdeskConfig::default(), &mut out).unwrap();

        let totals: Vec<i64> = report.results.iter().map(|r| r.total.cents()).collect();
        assert_eq!(totals, vec![2160, 9180, 1620]);
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].sku, "C003");
        assert_eq!(report.alerts[0].pending_order_line_count, 1);

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_run_missing_batch() {
        let cli_args = CliArgs {
            batch_path: PathBuf::from("/definitely/not/here.json"),
            ..CliArgs::default()
        };
        let err = run(&cli_args, &OrderdeskConfig::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
