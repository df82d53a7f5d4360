//! # Order Pricing Engine
//!
//! Fulfillment check, discount resolution and tax for a single order.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        price_order(order)                               │
//! │                                                                         │
//! │  validate_order ──► bad shape?      → Err(Validation)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fulfillable_subtotal                                                   │
//! │       ├── SKU missing?              → Err(UnknownSku)                   │
//! │       ├── qty > on hand?            → Err(InsufficientStock)            │
//! │       ├── Σ unit_price × qty        → subtotal                          │
//! │       └── past i64 cents?           → Err(Overflow)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tier discount   vip 15% | regular 10% if subtotal > 100 | 0            │
//! │  bulk discount   5% if units >= 10                                      │
//! │  discount      = bulk if bulk > tier else tier   (never both)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tax           = 8% of tax base (see TaxBase)                           │
//! │  total         = subtotal - discount + tax                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round each to cents ──► PricingResult { status: processed }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::inventory::InventoryIndex;
use crate::money::{ExactAmount, Money};
use crate::policy::{PricingPolicy, TaxBase};
use crate::types::{CustomerType, Order, OrderStatus, PricingResult};
use crate::validation::validate_order;

// =============================================================================
// Breakdown
// =============================================================================

/// Which discount rule won for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedDiscount {
    None,
    Tier,
    Bulk,
}

/// Unrounded price components of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: ExactAmount,
    pub discount: ExactAmount,
    pub tax: ExactAmount,
    pub total: ExactAmount,
    pub applied: AppliedDiscount,
}

impl PriceBreakdown {
    /// Computes discount, tax and total for a fulfillable subtotal.
    pub fn compute(
        customer_type: CustomerType,
        subtotal: Money,
        total_units: i64,
        policy: &PricingPolicy,
    ) -> Self {
        let exact_subtotal = subtotal.exact();
        let tier = tier_discount(customer_type, subtotal, policy);
        let bulk = bulk_discount(subtotal, total_units, policy);

        let (discount, applied) = match bulk {
            Some(bulk) if bulk > tier => (bulk, AppliedDiscount::Bulk),
            _ if tier > ExactAmount::zero() => (tier, AppliedDiscount::Tier),
            _ => (ExactAmount::zero(), AppliedDiscount::None),
        };

        let tax_base = match policy.tax_base {
            TaxBase::DiscountedSubtotal => exact_subtotal - discount,
            TaxBase::GrossSubtotal => exact_subtotal,
        };
        let tax = tax_base.apply(policy.tax_rate);

        PriceBreakdown {
            subtotal: exact_subtotal,
            discount,
            tax,
            total: exact_subtotal - discount + tax,
            applied,
        }
    }

    /// Rounds every component to cents.
    ///
    /// ## Errors
    /// `Overflow` when a rounded component does not fit in `Money`.
    pub fn into_result(self, order: &Order) -> CoreResult<PricingResult> {
        let cents = |amount: ExactAmount, field: &str| {
            amount
                .round_to_cents()
                .ok_or_else(|| CoreError::Overflow(field.to_string()))
        };

        Ok(PricingResult {
            order_id: order.id.clone(),
            subtotal: cents(self.subtotal, "subtotal")?,
            discount: cents(self.discount, "discount")?,
            tax: cents(self.tax, "tax")?,
            total: cents(self.total, "total")?,
            status: OrderStatus::Processed,
        })
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Customer-tier discount on `subtotal`.
pub fn tier_discount(
    customer_type: CustomerType,
    subtotal: Money,
    policy: &PricingPolicy,
) -> ExactAmount {
    match customer_type {
        CustomerType::Vip => subtotal.exact().apply(policy.vip_discount),
        CustomerType::Regular if subtotal > policy.regular_discount_min => {
            subtotal.exact().apply(policy.regular_discount)
        }
        _ => ExactAmount::zero(),
    }
}

/// Bulk discount on `subtotal`, if the order has enough units.
pub fn bulk_discount(
    subtotal: Money,
    total_units: i64,
    policy: &PricingPolicy,
) -> Option<ExactAmount> {
    (total_units >= policy.bulk_min_quantity).then(|| subtotal.exact().apply(policy.bulk_discount))
}

/// Checks every line against the snapshot and sums the line totals.
///
/// Each line is compared with the full quantity on hand; nothing is
/// reserved between lines. A line total or running subtotal past the
/// range of `Money` is an `Overflow`.
pub fn fulfillable_subtotal(order: &Order, index: &InventoryIndex<'_>) -> CoreResult<Money> {
    let mut subtotal = Money::zero();

    for line in &order.items {
        let item = index
            .get(&line.sku)
            .ok_or_else(|| CoreError::UnknownSku(line.sku.clone()))?;

        if !item.can_fulfil(line.quantity) {
            return Err(CoreError::InsufficientStock {
                sku: line.sku.clone(),
                available: item.quantity_on_hand,
                requested: line.quantity,
            });
        }

        subtotal = item
            .unit_price
            .checked_mul_quantity(line.quantity)
            .and_then(|line_total| subtotal.checked_add(line_total))
            .ok_or_else(|| CoreError::Overflow(format!("subtotal at line {}", line.sku)))?;
    }

    Ok(subtotal)
}

/// Prices one order against the snapshot.
///
/// ## Errors
/// - `Validation` for an order with no lines or a non-positive quantity
/// - `UnknownSku` / `InsufficientStock` when the order cannot be fulfilled
/// - `Overflow` when its amounts or unit count do not fit in an `i64`
pub fn price_order(
    order: &Order,
    index: &InventoryIndex<'_>,
    policy: &PricingPolicy,
) -> CoreResult<PricingResult> {
    validate_order(order)?;
    let subtotal = fulfillable_subtotal(order, index)?;
    let total_units = order
        .total_quantity()
        .ok_or_else(|| CoreError::Overflow("total quantity".to_string()))?;

    PriceBreakdown::compute(order.customer_type, subtotal, total_units, policy).into_result(order)
}

// =============================================================================
// Unit Tests
// =============================================================================
