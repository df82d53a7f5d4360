//! # Pricing Policy
//!
//! The rule constants of the pricing engine, grouped so a front end can
//! load them from configuration.
//!
//! ## Default Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                      Default      TOML key                        │
//! │  ────────────────────────  ───────────  ─────────────────────────────   │
//! │  VIP tier discount         15%          vip_discount_bps = 1500         │
//! │  Regular tier discount     10%          regular_discount_bps = 1000     │
//! │    ...only when subtotal > 100.00       regular_discount_min_cents      │
//! │  Bulk discount             5%           bulk_discount_bps = 500         │
//! │    ...when units >= 10                  bulk_min_quantity = 10          │
//! │  Tax                       8%           tax_rate_bps = 800              │
//! │  Tax base                  discounted   tax_base = "discounted_subtotal"│
//! │  Low-stock threshold       10           low_stock_threshold = 10        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Rate};
use crate::validation::validate_rate;

/// Low-stock threshold used when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

// =============================================================================
// Tax Base
// =============================================================================

/// The amount tax is charged on.
///
/// Whichever base is chosen applies to every order in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBase {
    /// Subtotal minus the winning discount.
    #[default]
    DiscountedSubtotal,

    /// Subtotal before any discount.
    GrossSubtotal,
}

impl fmt::Display for TaxBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxBase::DiscountedSubtotal => write!(f, "discounted_subtotal"),
            TaxBase::GrossSubtotal => write!(f, "gross_subtotal"),
        }
    }
}

impl FromStr for TaxBase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discounted_subtotal" | "discounted" | "net" => Ok(TaxBase::DiscountedSubtotal),
            "gross_subtotal" | "gross" | "subtotal" => Ok(TaxBase::GrossSubtotal),
            other => Err(CoreError::InvalidPolicy(format!(
                "Unknown tax base: '{}'. Valid options: discounted_subtotal, gross_subtotal",
                other
            ))),
        }
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// Discount, tax and alerting rules for one processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    #[serde(rename = "vip_discount_bps", default = "default_vip_discount")]
    pub vip_discount: Rate,

    #[serde(rename = "regular_discount_bps", default = "default_regular_discount")]
    pub regular_discount: Rate,

    /// Regular customers earn their discount only above this subtotal.
    #[serde(
        rename = "regular_discount_min_cents",
        default = "default_regular_discount_min"
    )]
    pub regular_discount_min: Money,

    #[serde(rename = "bulk_discount_bps", default = "default_bulk_discount")]
    pub bulk_discount: Rate,

    /// Units across all lines needed for the bulk discount (inclusive).
    #[serde(default = "default_bulk_min_quantity")]
    pub bulk_min_quantity: i64,

    #[serde(rename = "tax_rate_bps", default = "default_tax_rate")]
    pub tax_rate: Rate,

    #[serde(default)]
    pub tax_base: TaxBase,

    /// Items with strictly fewer units on hand are reported.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_vip_discount() -> Rate {
    Rate::from_bps(1500)
}

fn default_regular_discount() -> Rate {
    Rate::from_bps(1000)
}

fn default_regular_discount_min() -> Money {
    Money::from_cents(10_000)
}

fn default_bulk_discount() -> Rate {
    Rate::from_bps(500)
}

fn default_bulk_min_quantity() -> i64 {
    10
}

fn default_tax_rate() -> Rate {
    Rate::from_bps(800)
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            vip_discount: default_vip_discount(),
            regular_discount: default_regular_discount(),
            regular_discount_min: default_regular_discount_min(),
            bulk_discount: default_bulk_discount(),
            bulk_min_quantity: default_bulk_min_quantity(),
            tax_rate: default_tax_rate(),
            tax_base: TaxBase::default(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl PricingPolicy {
    /// Validates the policy.
    ///
    /// Rates above 100% are rejected, which keeps every discount at or
    /// below the subtotal it is taken from.
    pub fn validate(&self) -> CoreResult<()> {
        validate_rate("vip_discount_bps", self.vip_discount)?;
        validate_rate("regular_discount_bps", self.regular_discount)?;
        validate_rate("bulk_discount_bps", self.bulk_discount)?;
        validate_rate("tax_rate_bps", self.tax_rate)?;

        if self.regular_discount_min.is_negative() {
            return Err(CoreError::InvalidPolicy(
                "regular_discount_min_cents must not be negative".into(),
            ));
        }

        if self.bulk_min_quantity <= 0 {
            return Err(CoreError::InvalidPolicy(
                "bulk_min_quantity must be greater than 0".into(),
            ));
        }

        if self.low_stock_threshold < 0 {
            return Err(CoreError::InvalidPolicy(
                "low_stock_threshold must not be negative".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.vip_discount.bps(), 1500);
        assert_eq!(policy.regular_discount.bps(), 1000);
        assert_eq!(policy.regular_discount_min.cents(), 10_000);
        assert_eq!(policy.bulk_discount.bps(), 500);
        assert_eq!(policy.bulk_min_quantity, 10);
        assert_eq!(policy.tax_rate.bps(), 800);
        assert_eq!(policy.tax_base, TaxBase::DiscountedSubtotal);
        assert_eq!(policy.low_stock_threshold, 10);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let policy: PricingPolicy =
            serde_json::from_str(r#"{"tax_rate_bps": 825, "tax_base": "gross_subtotal"}"#)
                .unwrap();
        assert_eq!(policy.tax_rate, Rate::from_bps(825));
        assert_eq!(policy.tax_base, TaxBase::GrossSubtotal);
        assert_eq!(policy.vip_discount, Rate::from_bps(1500));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let policy = PricingPolicy {
            bulk_discount: Rate::from_bps(12_000),
            ..PricingPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(CoreError::Validation(_))));

        let policy = PricingPolicy {
            bulk_min_quantity: 0,
            ..PricingPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(CoreError::InvalidPolicy(_))));
    }

    #[test]
    fn test_tax_base_parsing() {
        assert_eq!("gross".parse::<TaxBase>().unwrap(), TaxBase::GrossSubtotal);
        assert_eq!(
            "Discounted_Subtotal".parse::<TaxBase>().unwrap(),
            TaxBase::DiscountedSubtotal
        );
        assert!("after_shipping".parse::<TaxBase>().is_err());
        assert_eq!(TaxBase::GrossSubtotal.to_string(), "gross_subtotal");
    }
}
