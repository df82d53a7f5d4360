//! # Validation Module
//!
//! Input checks for orders, inventory records and policy rates.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  InventoryIndex::build                                                  │
//! │  └── validate_inventory_item  → bad price/stock skipped (warn)         │
//! │                                                                         │
//! │  OrderProcessor::process / process_detailed                             │
//! │  └── validate_order           → bad order dropped (warn), rest priced  │
//! │                                 process_detailed also lists it          │
//! │                                                                         │
//! │  OrderProcessor::with_policy                                            │
//! │  └── PricingPolicy::validate  → uses validate_rate                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::validation::{validate_sku, validate_quantity};
//!
//! assert!(validate_sku("A001").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Rate, BPS_PER_UNIT};
use crate::types::{InventoryItem, Order};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a SKU on an order line.
///
/// ## Rules
/// - Must not be empty. Any other string is a SKU, matched exactly.
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    Ok(())
}

/// Validates a requested line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents. Zero is allowed.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity on hand. Zero is allowed.
pub fn validate_stock_level(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity_on_hand".to_string(),
        });
    }

    Ok(())
}

/// Validates a rate: 0% to 100%.
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > BPS_PER_UNIT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: BPS_PER_UNIT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an inventory record's price and stock level.
///
/// The SKU is not checked: a record is only ever reached through an exact
/// match with a validated order line.
pub fn validate_inventory_item(item: &InventoryItem) -> ValidationResult<()> {
    validate_price_cents(item.unit_price.cents())?;
    validate_stock_level(item.quantity_on_hand)
}

/// Validates an order's shape. Stock is not consulted here.
///
/// ## Rules
/// - At least one line item
/// - Every line has a valid SKU and a positive quantity
pub fn validate_order(order: &Order) -> ValidationResult<()> {
    if order.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for line in &order.items {
        validate_sku(&line.sku)?;
        validate_quantity(line.quantity)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
