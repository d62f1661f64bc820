//! # Error Types
//!
//! Domain-specific error types for parcel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parcel-core errors (this file)                                        │
//! │  ├── CoreError        - Order rule violations                          │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── MoneyParseError  - Malformed decimal amounts                      │
//! │                                                                         │
//! │  parcel-cli errors (separate crate)                                    │
//! │  └── CliError         - Config, file and output failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The model itself is permissive: `Order::add_item` and the entity
//! constructors never fail. These errors come from the hardened paths
//! (`validate()`, `Order::try_add_item`, `Order::try_with_sequence`,
//! `Money::from_str`).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order has reached the maximum number of line items.
    #[error("Order cannot have more than {max} items")]
    OrderTooLarge { max: usize },

    /// Adding the item would take the line or order total past `i64` cents.
    #[error("Adding '{item}' would overflow the order total")]
    TotalOverflow { item: String },

    /// The order-number sequence has no numbers left.
    #[error("No order numbers left in the sequence")]
    SequenceExhausted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// `Required` covers empty text fields; `MustBePositive`,
/// `MustBeNonNegative` and `OutOfRange` cover bad quantities and prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// A decimal amount could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    InvalidDigits(String),

    #[error("amount '{0}' has more than two decimal places")]
    TooManyDecimals(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
