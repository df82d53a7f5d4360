//! # Error Types
//!
//! Domain-specific error types for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Fulfillment and policy failures                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orderdesk-cli errors (separate crate)                                 │
//! │  └── CliError         - I/O, parsing and configuration failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejections Are Not Faults
//! `UnknownSku` and `InsufficientStock` describe why an order was left out
//! of a batch. [`crate::OrderProcessor::process`] never surfaces them; they
//! only show up in [`crate::BatchOutcome::rejected`] or from
//! [`crate::OrderProcessor::price_order`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An order line references a SKU that is not in the inventory snapshot.
    #[error("Unknown SKU: {0}")]
    UnknownSku(String),

    /// An order line asks for more units than the snapshot holds.
    ///
    /// Evaluated per line against the static snapshot: two lines for the
    /// same SKU are each checked against the full quantity on hand.
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// Pricing policy failed validation.
    #[error("Invalid pricing policy: {0}")]
    InvalidPolicy(String),

    /// An order's amounts or unit count do not fit the money type.
    #[error("Arithmetic overflow computing {0}")]
    Overflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for the expected "cannot fulfil" outcomes, false for bad input.
    pub fn is_unfulfillable(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownSku(_) | CoreError::InsufficientStock { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised per order or per inventory record; one bad record never aborts
/// the rest of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
