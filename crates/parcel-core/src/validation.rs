//! # Validation Module
//!
//! Input checks for the hardened order paths.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Constructors (Customer::new, Product::new, Delivery::home, ...)        │
//! │  └── never validate; accept whatever the caller supplies               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Entity checks (Customer::validate, Product::validate, ...)            │
//! │  └── composed from the functions in THIS MODULE                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Order::try_add_item                                                   │
//! │  └── Product::validate + order size limit                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parcel_core::validation::{validate_required, validate_quantity};
//!
//! assert!(validate_required("address", "Street 1").is_ok());
//! assert!(validate_required("address", "   ").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name for a customer, product or delivery point.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only text.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;

    if value.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// There is no upper bound; `Order::try_add_item` rejects lines whose
/// totals overflow.
///
/// ```rust
/// use parcel_core::money::Money;
/// use parcel_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
