//! # Batch Files
//!
//! A batch file is one JSON document holding the inventory snapshot and the
//! orders to price against it:
//!
//! ```json
//! {
//!   "inventory": [
//!     { "sku": "A001", "name": "Widget", "unit_price_cents": 1000, "quantity_on_hand": 100 }
//!   ],
//!   "orders": [
//!     { "id": 1, "customer_type": "regular", "items": [{ "sku": "A001", "quantity": 2 }] }
//!   ]
//! }
//! ```

use orderdesk_core::{InventoryItem, Order};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::CliResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

impl BatchFile {
    /// Reads and parses a batch file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let batch = Self::parse(&contents)?;
        info!(
            ?path,
            inventory = batch.inventory.len(),
            orders = batch.orders.len(),
            "Batch loaded"
        );
        Ok(batch)
    }

    pub fn parse(contents: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use orderdesk_core::{CustomerType, Money, OrderId};
    use std::io::Write;

    #[test]
    fn test_parse() {
        let batch = BatchFile::parse(
            r#"{
                "inventory": [
                    {"sku": "A001", "name": "Widget", "unit_price_cents": 1000, "quantity_on_hand": 100},
                    {"sku": "B002", "unit_price_cents": 2500, "quantity": 50}
                ],
                "orders": [
                    {"id": 1, "customer_type": "vip", "items": [{"sku": "B002", "quantity": 4}]},
                    {"id": "web-2", "items": [{"sku": "A001", "quantity": 1}]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(batch.inventory.len(), 2);
        assert_eq!(batch.inventory[1].unit_price, Money::from_cents(2500));
        assert_eq!(batch.inventory[1].quantity_on_hand, 50);
        assert_eq!(batch.orders[0].customer_type, CustomerType::Vip);
        assert_eq!(batch.orders[1].id, OrderId::from("web-2"));
        assert_eq!(batch.orders[1].customer_type, CustomerType::Other);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(BatchFile::parse("{}").unwrap(), BatchFile::default());
    }

    #[test]
    fn test_malformed() {
        let err = BatchFile::parse(r#"{"orders": [{"items": []}]}"#).unwrap_err();
        assert!(matches!(err, CliError::BatchParse(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"inventory": [{{"sku": "C003", "unit_price_cents": 500, "quantity_on_hand": 200}}]}}"#
        )
        .unwrap();

        let batch = BatchFile::load(file.path()).unwrap();
        assert_eq!(batch.inventory[0].sku, "C003");
        assert!(batch.orders.is_empty());
    }
}
