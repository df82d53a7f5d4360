//! # Run Report
//!
//! The JSON document printed for one batch run.

use chrono::{DateTime, Utc};
use orderdesk_core::{LowStockAlert, OrderProcessor, OrderRejection, PricingResult, TaxBase};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub tax_base: TaxBase,
    pub low_stock_threshold: i64,
    pub results: Vec<PricingResult>,
    /// Present only for detailed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<OrderRejection>>,
    pub alerts: Vec<LowStockAlert>,
}

impl Report {
    /// Runs both passes of `processor`.
    ///
    /// `threshold` overrides the policy's low-stock threshold.
    pub fn build(processor: &OrderProcessor<'_>, detailed: bool, threshold: Option<i64>) -> Self {
        let threshold = threshold.unwrap_or(processor.policy().low_stock_threshold);

        let (results, rejected) = if detailed {
            let outcome = processor.process_detailed();
            (outcome.priced, Some(outcome.rejected))
        } else {
            (processor.process(), None)
        };

        Report {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            tax_base: processor.policy().tax_base,
            low_stock_threshold: threshold,
            results,
            rejected,
            alerts: processor.low_stock_alerts_below(threshold),
        }
    }
}
