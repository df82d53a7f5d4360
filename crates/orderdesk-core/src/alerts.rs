//! # Stock Alert Reporter
//!
//! Lists inventory records below a quantity threshold, each with the number
//! of order lines in the batch that ask for it.
//!
//! The line count is raw demand: lines from orders that would be rejected
//! by the pricing engine still count, and two lines for the same SKU in one
//! order count twice.

use std::collections::HashMap;

use crate::types::{InventoryItem, LowStockAlert, Order};

/// Counts order lines per SKU across all orders.
pub fn pending_line_counts(orders: &[Order]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for line in orders.iter().flat_map(|o| &o.items) {
        *counts.entry(line.sku.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Builds one alert per record with `quantity_on_hand < threshold`, in
/// inventory order.
///
/// Every record is considered, including repeated SKUs; each repeat gets
/// its own alert with the same line count.
pub fn low_stock_alerts(
    inventory: &[InventoryItem],
    orders: &[Order],
    threshold: i64,
) -> Vec<LowStockAlert> {
    let low: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|item| item.quantity_on_hand < threshold)
        .collect();

    if low.is_empty() {
        return Vec::new();
    }

    let counts = pending_line_counts(orders);
    low.into_iter()
        .map(|item| LowStockAlert {
            sku: item.sku.clone(),
            current_quantity: item.quantity_on_hand,
            pending_order_line_count: counts.get(item.sku.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{CustomerType, OrderLineItem};

    fn order(id: i64, lines: &[(&str, i64)]) -> Order {
        Order::new(
            id,
            CustomerType::Other,
            lines
                .iter()
                .map(|(sku, qty)| OrderLineItem::new(*sku, *qty))
                .collect(),
        )
    }

    #[test]
    fn test_single_low_item() {
        let inventory = vec![
            InventoryItem::new("A001", "", Money::from_cents(1000), 5),
            InventoryItem::new("B002", "", Money::from_cents(2500), 50),
        ];
        let orders = vec![order(1, &[("A001", 1)]), order(2, &[("A001", 2)])];

        let alerts = low_stock_alerts(&inventory, &orders, 10);
        assert_eq!(
            alerts,
            vec![LowStockAlert {
                sku: "A001".to_string(),
                current_quantity: 5,
                pending_order_line_count: 2,
            }]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let inventory = vec![
            InventoryItem::new("AT", "", Money::zero(), 10),
            InventoryItem::new("BELOW", "", Money::zero(), 9),
        ];
        let alerts = low_stock_alerts(&inventory, &[], 10);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].sku, "BELOW");
        assert_eq!(alerts[0].pending_order_line_count, 0);
    }

    #[test]
    fn test_counts_lines_not_orders_and_ignores_fulfillability() {
        let inventory = vec![InventoryItem::new("A001", "", Money::from_cents(1000), 2)];
        let orders = vec![
            // same SKU twice in one order, and far above stock
            order(1, &[("A001", 50), ("A001", 50)]),
            order(2, &[("B002", 1)]),
            order(3, &[("A001", 1)]),
        ];
        let alerts = low_stock_alerts(&inventory, &orders, 10);
        assert_eq!(alerts[0].pending_order_line_count, 3);
    }

    #[test]
    fn test_preserves_inventory_order() {
        let inventory = vec![
            InventoryItem::new("Z", "", Money::zero(), 0),
            InventoryItem::new("M", "", Money::zero(), 100),
            InventoryItem::new("A", "", Money::zero(), 3),
        ];
        let skus: Vec<String> = low_stock_alerts(&inventory, &[], 10)
            .into_iter()
            .map(|a| a.sku)
            .collect();
        assert_eq!(skus, vec!["Z", "A"]);
    }

    #[test]
    fn test_pending_line_counts() {
        let orders = vec![order(1, &[("A", 1), ("B", 1)]), order(2, &[("A", 7)])];
        let counts = pending_line_counts(&orders);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.get("C"), None);
    }
}
