//! Turns order reports into the text written to stdout.

use parcel_core::OrderReport;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Renders `reports` in `format`.
///
/// Text reports are separated by a blank line; JSON is always an array,
/// even for a single order.
pub fn render(reports: &[OrderReport], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::{Courier, Customer, Delivery, Money, Order, OrderNumberSequence, Product, Shop};

    fn reports() -> Vec<OrderReport> {
        let sequence = OrderNumberSequence::new();
        let customer = Customer::new("A", "a@x.com", "1", "addr");

        let mut first = Order::with_sequence(
            Delivery::home("Street 1", Courier::new("Bob")),
            customer.clone(),
            &sequence,
        );
        first.add_item(Product::new("P1", "d", Money::from_cents(10000), 1));

        let second = Order::with_sequence(
            Delivery::shop("Square 3", Shop::new("Corner")),
            customer,
            &sequence,
        );

        vec![first.report(), second.report()]
    }

    #[test]
    fn test_text_blocks_separated_by_blank_line() {
        let text = render(&reports(), OutputFormat::Text).unwrap();
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Order number: 1\n"));
        assert!(blocks[0].contains("- P1 (x1)"));
        assert!(blocks[1].starts_with("Order number: 2\n"));
        assert!(blocks[1].ends_with("Total cost: 0.00"));
    }

    #[test]
    fn test_json_is_an_array() {
        let json = render(&reports(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let orders = value.as_array().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0]["delivery"], "home delivery to Street 1; courier: Bob");
        assert_eq!(orders[1]["delivery_kind"], "shop");
    }

    #[test]
    fn test_no_reports() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
