//! # Domain Types
//!
//! Input snapshots and output records of a pricing run.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (caller owned, read only)        OUTPUT (fresh per call)         │
//! │  ┌─────────────────┐                    ┌─────────────────┐             │
//! │  │  InventoryItem  │                    │  PricingResult  │             │
//! │  │  sku            │                    │  order_id       │             │
//! │  │  name           │                    │  subtotal       │             │
//! │  │  unit_price     │                    │  discount, tax  │             │
//! │  │  qty_on_hand    │                    │  total, status  │             │
//! │  └─────────────────┘                    └─────────────────┘             │
//! │  ┌─────────────────┐                    ┌─────────────────┐             │
//! │  │      Order      │                    │  LowStockAlert  │             │
//! │  │  id             │                    │  sku            │             │
//! │  │  customer_type  │                    │  current_qty    │             │
//! │  │  items[]  ──────┼──► OrderLineItem   │  pending_lines  │             │
//! │  └─────────────────┘    sku, quantity   └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Inventory Item
// =============================================================================

/// One product record of an inventory snapshot.
///
/// The engine never mutates these; pricing an order does not decrement
/// `quantity_on_hand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Stock Keeping Unit - unique within a snapshot.
    pub sku: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Price of one unit in cents.
    #[serde(rename = "unit_price_cents")]
    pub unit_price: Money,

    /// Units currently in stock.
    #[serde(alias = "quantity")]
    pub quantity_on_hand: i64,
}

impl InventoryItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity_on_hand: i64,
    ) -> Self {
        InventoryItem {
            sku: sku.into(),
            name: name.into(),
            unit_price,
            quantity_on_hand,
        }
    }

    /// Checks if `quantity` units can be taken from this record.
    #[inline]
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        quantity <= self.quantity_on_hand
    }
}

// =============================================================================
// Customer Type
// =============================================================================

/// Customer classification driving the tiered discount.
///
/// Any value other than `vip` or `regular` (including a missing field)
/// becomes `Other`, which earns no tiered discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    Vip,
    Regular,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Vip => write!(f, "vip"),
            CustomerType::Regular => write!(f, "regular"),
            CustomerType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for CustomerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "vip" => CustomerType::Vip,
            "regular" => CustomerType::Regular,
            _ => CustomerType::Other,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

/// Opaque order identifier; batch files use either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        OrderId::Number(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId::Text(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId::Text(id)
    }
}

/// A requested SKU and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub sku: String,
    pub quantity: i64,
}

impl OrderLineItem {
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        OrderLineItem {
            sku: sku.into(),
            quantity,
        }
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(default)]
    pub customer_type: CustomerType,

    /// Line items in the order they were entered.
    pub items: Vec<OrderLineItem>,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        customer_type: CustomerType,
        items: Vec<OrderLineItem>,
    ) -> Self {
        Order {
            id: id.into(),
            customer_type,
            items,
        }
    }

    /// Returns the number of units across all lines, or `None` on overflow.
    pub fn total_quantity(&self) -> Option<i64> {
        self.items
            .iter()
            .try_fold(0i64, |total, line| total.checked_add(line.quantity))
    }
}

// =============================================================================
// Results
// =============================================================================

/// Outcome status of a priced order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processed,
}

/// Price breakdown of one fulfillable order.
///
/// Each amount is rounded to cents on its own; `total` is rounded from the
/// full-precision total, not summed from the rounded parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub order_id: OrderId,
    #[serde(rename = "subtotal_cents")]
    pub subtotal: Money,
    #[serde(rename = "discount_cents")]
    pub discount: Money,
    #[serde(rename = "tax_cents")]
    pub tax: Money,
    #[serde(rename = "total_cents")]
    pub total: Money,
    pub status: OrderStatus,
}

/// An inventory record below the low-stock threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub sku: String,
    pub current_quantity: i64,
    /// Order lines across the whole batch naming this SKU, fulfillable or not.
    pub pending_order_line_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_type_parsing() {
        assert_eq!("vip".parse::<CustomerType>().unwrap(), CustomerType::Vip);
        assert_eq!(
            "regular".parse::<CustomerType>().unwrap(),
            CustomerType::Regular
        );
        assert_eq!(
            "wholesale".parse::<CustomerType>().unwrap(),
            CustomerType::Other
        );
        assert_eq!("VIP".parse::<CustomerType>().unwrap(), CustomerType::Other);
    }

    #[test]
    fn test_unknown_customer_type_deserializes_to_other() {
        let order: Order = serde_json::from_str(
            r#"{"id": 7, "customer_type": "gold", "items": [{"sku": "A001", "quantity": 1}]}"#,
        )
        .unwrap();
        assert_eq!(order.customer_type, CustomerType::Other);

        let order: Order =
            serde_json::from_str(r#"{"id": "ord-8", "items": []}"#).unwrap();
        assert_eq!(order.customer_type, CustomerType::Other);
        assert_eq!(order.id, OrderId::from("ord-8"));
    }

    #[test]
    fn test_order_id_accepts_numbers_and_strings() {
        let id: OrderId = serde_json::from_str("42").unwrap();
        assert_eq!(id, OrderId::Number(42));
        assert_eq!(id.to_string(), "42");

        let id: OrderId = serde_json::from_str("\"SO-1\"").unwrap();
        assert_eq!(id.to_string(), "SO-1");
    }

    #[test]
    fn test_inventory_item_wire_format() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"sku": "A001", "name": "Widget", "unit_price_cents": 1000, "quantity": 100}"#,
        )
        .unwrap();
        assert_eq!(item.unit_price, Money::from_cents(1000));
        assert_eq!(item.quantity_on_hand, 100);
        assert!(item.can_fulfil(100));
        assert!(!item.can_fulfil(101));
    }

    #[test]
    fn test_total_quantity() {
        let order = Order::new(
            1_i64,
            CustomerType::Regular,
            vec![OrderLineItem::new("A", 4), OrderLineItem::new("B", 6)],
        );
        assert_eq!(order.total_quantity(), Some(10));

        let huge = Order::new(
            2_i64,
            CustomerType::Regular,
            vec![OrderLineItem::new("A", i64::MAX), OrderLineItem::new("B", 1)],
        );
        assert_eq!(huge.total_quantity(), None);
    }

    #[test]
    fn test_pricing_result_serialization() {
        let result = PricingResult {
            order_id: OrderId::Number(1),
            subtotal: Money::from_cents(2000),
            discount: Money::zero(),
            tax: Money::from_cents(160),
            total: Money::from_cents(2160),
            status: OrderStatus::Processed,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_cents"], 2160);
        assert_eq!(json["status"], "processed");
    }
}
