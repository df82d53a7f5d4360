//! # Order Processor
//!
//! Binds an order batch and an inventory snapshot and runs the two
//! read-only passes over them.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderProcessor::new(&orders, &inventory)                               │
//! │       │                                                                 │
//! │       └── InventoryIndex::build   (once, borrowed, never mutated)       │
//! │                                                                         │
//! │  .process()            ──► Vec<PricingResult>   rejected orders dropped │
//! │  .process_detailed()   ──► BatchOutcome         rejected orders listed  │
//! │  .low_stock_alerts()   ──► Vec<LowStockAlert>                           │
//! │                                                                         │
//! │  Every call takes &self and is a pure function of the bound inputs.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::alerts;
use crate::error::{CoreError, CoreResult};
use crate::inventory::InventoryIndex;
use crate::policy::PricingPolicy;
use crate::pricing::price_order;
use crate::types::{InventoryItem, LowStockAlert, Order, OrderId, PricingResult};

// =============================================================================
// Batch Outcome
// =============================================================================

/// An order left out of the priced results, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRejection {
    pub order_id: OrderId,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: CoreError,
}

fn serialize_reason<S: serde::Serializer>(reason: &CoreError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Priced and rejected orders of one run, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub priced: Vec<PricingResult>,
    pub rejected: Vec<OrderRejection>,
}

// =============================================================================
// Processor
// =============================================================================

/// Pricing and stock reporting over a borrowed batch.
#[derive(Debug, Clone)]
pub struct OrderProcessor<'a> {
    orders: &'a [Order],
    inventory: &'a [InventoryItem],
    index: InventoryIndex<'a>,
    policy: PricingPolicy,
}

impl<'a> OrderProcessor<'a> {
    /// Creates a processor with the default policy.
    pub fn new(orders: &'a [Order], inventory: &'a [InventoryItem]) -> Self {
        OrderProcessor {
            orders,
            inventory,
            index: InventoryIndex::build(inventory),
            policy: PricingPolicy::default(),
        }
    }

    /// Creates a processor with a custom policy.
    ///
    /// ## Errors
    /// Returns the policy's validation error; the batch is not touched.
    pub fn with_policy(
        orders: &'a [Order],
        inventory: &'a [InventoryItem],
        policy: PricingPolicy,
    ) -> CoreResult<Self> {
        policy.validate()?;
        Ok(OrderProcessor {
            orders,
            inventory,
            index: InventoryIndex::build(inventory),
            policy,
        })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn inventory(&self) -> &'a [InventoryItem] {
        self.inventory
    }

    /// Prices every fulfillable order, in input order.
    ///
    /// Orders that cannot be fulfilled or fail validation are left out;
    /// nothing is returned for them.
    pub fn process(&self) -> Vec<PricingResult> {
        let priced: Vec<PricingResult> = self
            .orders
            .iter()
            .filter_map(|order| self.price_in_batch(order).ok())
            .collect();

        debug!(
            orders = self.orders.len(),
            priced = priced.len(),
            "Batch priced"
        );

        priced
    }

    /// Like [`process`](Self::process), also reporting each left-out order.
    pub fn process_detailed(&self) -> BatchOutcome {
        let mut outcome = BatchOutcome {
            priced: Vec::with_capacity(self.orders.len()),
            rejected: Vec::new(),
        };

        for order in self.orders {
            match self.price_in_batch(order) {
                Ok(result) => outcome.priced.push(result),
                Err(reason) => outcome.rejected.push(OrderRejection {
                    order_id: order.id.clone(),
                    reason,
                }),
            }
        }

        debug!(
            orders = self.orders.len(),
            priced = outcome.priced.len(),
            rejected = outcome.rejected.len(),
            "Batch priced"
        );

        outcome
    }

    /// Prices a single order against this processor's snapshot.
    pub fn price_order(&self, order: &Order) -> CoreResult<PricingResult> {
        price_order(order, &self.index, &self.policy)
    }

    /// Unfulfillable orders are dropped quietly; anything else is bad input
    /// and gets a warning.
    fn price_in_batch(&self, order: &Order) -> CoreResult<PricingResult> {
        self.price_order(order).map_err(|reason| {
            if !reason.is_unfulfillable() {
                warn!(order_id = %order.id, error = %reason, "Skipping invalid order");
            }
            reason
        })
    }

    /// Low-stock report using the policy threshold (10 by default).
    pub fn low_stock_alerts(&self) -> Vec<LowStockAlert> {
        self.low_stock_alerts_below(self.policy.low_stock_threshold)
    }

    /// Low-stock report for records with fewer than `threshold` units.
    pub fn low_stock_alerts_below(&self, threshold: i64) -> Vec<LowStockAlert> {
        let report = alerts::low_stock_alerts(self.inventory, self.orders, threshold);
        debug!(threshold, alerts = report.len(), "Low-stock report built");
        report
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
