//! # orderdesk-core: Bulk Order Pricing and Low-Stock Reporting
//!
//! Pure business logic: no I/O, no subscriber setup, no configuration
//! loading. Callers hand in an order batch and an inventory snapshot and
//! get back price breakdowns and a low-stock report.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Orderdesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              orderdesk-cli (batch file → JSON report)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orderdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  pricing  │  │  alerts   │  │ processor │  │   │
//! │  │   │   index   │  │ discounts │  │ low stock │  │  facade   │  │   │
//! │  │   │           │  │    tax    │  │  demand   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   money • types • policy • validation • error                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Orders, inventory records, results
//! - [`money`] - Integer-cent money, basis-point rates, exact intermediates
//! - [`policy`] - Discount, tax and alert thresholds
//! - [`inventory`] - SKU index over a snapshot
//! - [`pricing`] - Fulfillment check and price breakdown
//! - [`alerts`] - Low-stock report
//! - [`processor`] - Batch facade over the above
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use orderdesk_core::{CustomerType, InventoryItem, Money, Order, OrderLineItem, OrderProcessor};
//!
//! let inventory = vec![InventoryItem::new("B002", "Gadget", Money::from_cents(2500), 50)];
//! let orders = vec![Order::new(2_i64, CustomerType::Vip, vec![OrderLineItem::new("B002", 4)])];
//!
//! let processor = OrderProcessor::new(&orders, &inventory);
//! let results = processor.process();
//!
//! assert_eq!(results[0].discount, Money::from_cents(1500));
//! assert_eq!(results[0].tax, Money::from_cents(680));
//! assert_eq!(results[0].total, Money::from_cents(9180));
//! ```

pub mod alerts;
pub mod error;
pub mod inventory;
pub mod money;
pub mod policy;
pub mod pricing;
pub mod processor;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::InventoryIndex;
pub use money::{ExactAmount, Money, Rate};
pub use policy::{PricingPolicy, TaxBase, DEFAULT_LOW_STOCK_THRESHOLD};
pub use pricing::{AppliedDiscount, PriceBreakdown};
pub use processor::{BatchOutcome, OrderProcessor, OrderRejection};
pub use types::*;
