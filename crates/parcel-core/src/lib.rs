//! # parcel-core: Pure Order Model for Parcel
//!
//! Customers, products, delivery methods and the order that ties them
//! together. No I/O: rendering produces strings, the caller decides where
//! they go.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parcel Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 parcel-cli (apps/parcel-cli)                    │   │
//! │  │    config ──► order files ──► build orders ──► print reports    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parcel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ delivery │ │  types   │ │  order   │ │ report / money / │  │   │
//! │  │   │ Courier  │ │ Customer │ │  Order   │ │ sequence /       │  │   │
//! │  │   │ PickPoint│ │ Product  │ │          │ │ validation       │  │   │
//! │  │   │ Shop     │ │ Status   │ │          │ │                  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`delivery`] - Delivery methods and their hand-off points
//! - [`types`] - Customer, Product, OrderStatus
//! - [`order`] - The order aggregate
//! - [`report`] - Text and JSON rendering of an order
//! - [`sequence`] - Order number counter
//! - [`money`] - Integer money (no floating point!)
//! - [`validation`] - Opt-in input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use parcel_core::{Courier, Customer, Delivery, Money, Order, OrderNumberSequence, Product};
//!
//! let sequence = OrderNumberSequence::new();
//! let mut order = Order::with_sequence(
//!     Delivery::home("Street 1", Courier::new("Bob")),
//!     Customer::new("A", "a@x.com", "1", "addr"),
//!     &sequence,
//! );
//! order.add_item(Product::new("P1", "d", "100.00".parse().unwrap(), 1));
//!
//! assert_eq!(order.total_cost(), Money::from_cents(10000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod delivery;
pub mod error;
pub mod money;
pub mod order;
pub mod report;
pub mod sequence;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use delivery::{Courier, Delivery, DeliveryKind, DeliveryPoint, PickPoint, Shop};
pub use error::{CoreError, CoreResult, MoneyParseError, ValidationError};
pub use money::Money;
pub use order::Order;
pub use report::{OrderReport, ReportLine};
pub use sequence::{OrderNumber, OrderNumberSequence};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items accepted by `Order::try_add_item`.
pub const MAX_ORDER_ITEMS: usize = 1000;

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
