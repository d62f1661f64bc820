//! # Domain Types
//!
//! Value records an order is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │   OrderStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  Pending (dflt) │       │
//! │  │  email          │   │  description    │   │  Processing     │       │
//! │  │  phone_number   │   │  price (Money)  │   │  Shipped        │       │
//! │  │  address        │   │  quantity       │   │  Delivered      │       │
//! │  └─────────────────┘   └─────────────────┘   │  Cancelled      │       │
//! │                                               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customer and Product are immutable: fields are private and only read
//! through accessors. Constructors accept anything; `validate()` is the
//! opt-in check.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_name, validate_price, validate_quantity, ValidationResult};

// =============================================================================
// Customer
// =============================================================================

/// Contact record of the person placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Only the name is required; contact fields are free text.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("customer name", &self.name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog line as ordered: what, at which unit price, how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    name: String,
    description: String,
    price: Money,
    quantity: i64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        Product {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity, saturating on overflow.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Unit price × quantity, or `None` when it does not fit in `i64` cents.
    pub fn checked_line_total(&self) -> Option<Money> {
        self.price.checked_multiply_quantity(self.quantity)
    }

    /// Requires a name, a non-negative price and a positive quantity.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("product name", &self.name)?;
        validate_price(self.price)?;
        validate_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle stage of an order.
///
/// Orders are created `Pending` and nothing in this crate moves them on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting to be processed.
    #[default]
    Pending,
    /// Being assembled.
    Processing,
    /// Handed to the delivery method.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Will not be fulfilled.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
