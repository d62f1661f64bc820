//! # Order
//!
//! Aggregates one delivery, one customer and the products ordered.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Operations                                │
//! │                                                                         │
//! │  Order::new(delivery, customer)                                        │
//! │      │   number = sequence.next_number()   (1, 2, 3, ...)              │
//! │      │   status = Pending, items = [], total_cost = 0.00               │
//! │      ▼                                                                  │
//! │  add_item(product)  ──► items.push(product)                            │
//! │      │                  total_cost += price × quantity                 │
//! │      ▼                                                                  │
//! │  display_order_info() ──► text report (pure, no printing)              │
//! │                                                                         │
//! │  There is no removal: items and total_cost only grow.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use parcel_core::delivery::{Courier, Delivery};
//! use parcel_core::money::Money;
//! use parcel_core::order::Order;
//! use parcel_core::sequence::OrderNumberSequence;
//! use parcel_core::types::{Customer, Product};
//!
//! let sequence = OrderNumberSequence::new();
//! let mut order = Order::with_sequence(
//!     Delivery::home("Street 1", Courier::new("Bob")),
//!     Customer::new("A", "a@x.com", "1", "addr"),
//!     &sequence,
//! );
//! order.add_item(Product::new("P1", "d", Money::from_cents(10000), 1));
//! order.add_item(Product::new("P2", "d", Money::from_cents(5000), 2));
//!
//! assert_eq!(order.number().value(), 1);
//! assert_eq!(order.total_cost(), Money::from_cents(20000));
//! assert!(order.display_order_info().contains("P2 (x2)"));
//! ```

use chrono::{DateTime, Utc};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::delivery::Delivery;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::report::OrderReport;
use crate::sequence::{OrderNumber, OrderNumberSequence};
use crate::types::{Customer, OrderStatus, Product};
use crate::MAX_ORDER_ITEMS;

/// A customer's order.
///
/// ## Invariants
/// - `number` is drawn exactly once, at construction
/// - `total_cost` equals the sum of `price × quantity` over `items`
///   (saturating on `add_item`, checked on `try_add_item`)
/// - `items` keeps insertion order and may hold the same product twice
/// - `delivery` and `customer` never change
///
/// Not `Clone`: a copy would share the order number.
#[derive(Debug)]
pub struct Order {
    id: Uuid,
    number: OrderNumber,
    status: OrderStatus,
    delivery: Delivery,
    customer: Customer,
    items: Vec<Product>,
    total_cost: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order numbered from the process-wide sequence.
    pub fn new(delivery: Delivery, customer: Customer) -> Self {
        Self::with_sequence(delivery, customer, OrderNumberSequence::global())
    }

    /// Creates an order numbered from `sequence`.
    ///
    /// # Panics
    /// If `sequence` has no numbers left. Use
    /// [`try_with_sequence`](Self::try_with_sequence) when the sequence
    /// may start near `u64::MAX`.
    pub fn with_sequence(
        delivery: Delivery,
        customer: Customer,
        sequence: &OrderNumberSequence,
    ) -> Self {
        match Self::try_with_sequence(delivery, customer, sequence) {
            Ok(order) => order,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates an order numbered from `sequence`, failing with
    /// [`CoreError::SequenceExhausted`] instead of reusing a number.
    pub fn try_with_sequence(
        delivery: Delivery,
        customer: Customer,
        sequence: &OrderNumberSequence,
    ) -> CoreResult<Self> {
        let number = sequence
            .try_next_number()
            .ok_or(CoreError::SequenceExhausted)?;

        let order = Order {
            id: Uuid::new_v4(),
            number,
            status: OrderStatus::default(),
            delivery,
            customer,
            items: Vec::new(),
            total_cost: Money::zero(),
            created_at: Utc::now(),
        };

        debug!(
            number = %order.number,
            id = %order.id,
            delivery = %order.delivery.kind(),
            "Order created"
        );

        Ok(order)
    }

    /// Appends a product and adds its line total to `total_cost`.
    ///
    /// Accepts any product, including negative prices and quantities.
    /// Amounts past the `i64` range saturate.
    pub fn add_item(&mut self, product: Product) {
        let total = self.total_cost + product.line_total();
        self.push_item(product, total);
    }

    /// Like [`add_item`](Self::add_item), but validates the product and
    /// enforces [`MAX_ORDER_ITEMS`] first, and rejects totals past `i64`
    /// cents with [`CoreError::TotalOverflow`]. The order is unchanged on
    /// error.
    pub fn try_add_item(&mut self, product: Product) -> CoreResult<()> {
        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_ITEMS,
            });
        }

        product.validate()?;

        let total = product
            .checked_line_total()
            .and_then(|line| self.total_cost.checked_add(line))
            .ok_or_else(|| CoreError::TotalOverflow {
                item: product.name().to_string(),
            })?;

        self.push_item(product, total);
        Ok(())
    }

    fn push_item(&mut self, product: Product, total: Money) {
        self.total_cost = total;
        trace!(
            number = %self.number,
            item = product.name(),
            quantity = product.quantity(),
            total = %self.total_cost,
            "Item added"
        );
        self.items.push(product);
    }

    /// System identifier (UUID v4).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Human-facing order number.
    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Products in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(Product::quantity).sum()
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Structured snapshot for rendering.
    pub fn report(&self) -> OrderReport {
        OrderReport::from_order(self)
    }

    /// The text summary of the order.
    pub fn display_order_info(&self) -> String {
        self.report().to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
