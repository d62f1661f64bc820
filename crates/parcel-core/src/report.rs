//! # Order Report
//!
//! Rendering of an order, kept apart from any output device.
//!
//! ## Text Layout
//! ```text
//! Order number: 1
//! Order status: Pending
//! Customer: A
//! home delivery to Street 1; courier: Bob
//! Items:
//! - P1 (x1)
//! - P2 (x2)
//! Total cost: 200.00
//! ```
//!
//! The same snapshot serializes to JSON for machine consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::delivery::DeliveryKind;
use crate::money::Money;
use crate::order::Order;
use crate::sequence::OrderNumber;
use crate::types::OrderStatus;

/// One ordered product as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportLine {
    pub name: String,
    pub quantity: i64,
    pub line_total: Money,
}

/// Snapshot of an order at the time the report was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderReport {
    pub number: OrderNumber,
    pub status: OrderStatus,
    pub customer_name: String,
    pub delivery_kind: DeliveryKind,
    /// `Delivery::display_address` text.
    pub delivery: String,
    pub delivery_info: String,
    pub items: Vec<ReportLine>,
    pub total_cost: Money,
}

impl OrderReport {
    pub fn from_order(order: &Order) -> Self {
        let delivery = order.delivery();

        OrderReport {
            number: order.number(),
            status: order.status(),
            customer_name: order.customer().name().to_string(),
            delivery_kind: delivery.kind(),
            delivery: delivery.display_address(),
            delivery_info: delivery.delivery_info().to_string(),
            items: order
                .items()
                .iter()
                .map(|product| ReportLine {
                    name: product.name().to_string(),
                    quantity: product.quantity(),
                    line_total: product.line_total(),
                })
                .collect(),
            total_cost: order.total_cost(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.name, self.quantity)
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order number: {}", self.number)?;
        writeln!(f, "Order status: {}", self.status)?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "{}", self.delivery)?;
        writeln!(f, "Items:")?;
        for line in &self.items {
            writeln!(f, "- {}", line)?;
        }
        write!(f, "Total cost: {}", self.total_cost)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
