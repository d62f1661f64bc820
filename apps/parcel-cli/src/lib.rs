//! # parcel-cli
//!
//! Drives `parcel-core` from the command line: reads order files, builds
//! the orders and renders their reports.
//!
//! ## Run Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CliConfig ──► order files (or the built-in demo)                       │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │             OrderFile::build_order  ◄── one OrderNumberSequence         │
//! │                     │                   starting at sequence.start      │
//! │                     ▼                                                   │
//! │             Order::report ──► render (text | json) ──► stdout           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod render;

use std::path::PathBuf;

use parcel_core::OrderNumberSequence;
use tracing::info;

pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, CliResult};
pub use input::OrderFile;

/// Builds every order and returns the rendered output.
///
/// Orders are numbered in argument order. With no files the demo order
/// is used.
pub fn run(config: &CliConfig, order_files: &[PathBuf]) -> CliResult<String> {
    let sources = if order_files.is_empty() {
        info!("No order files given, running the demo order");
        vec![OrderFile::demo()?]
    } else {
        order_files
            .iter()
            .map(|path| OrderFile::read(path))
            .collect::<CliResult<Vec<_>>>()?
    };

    let sequence = OrderNumberSequence::starting_at(config.sequence.start);
    let mut reports = Vec::with_capacity(sources.len());
    for source in sources {
        let order = source.build_order(&sequence, config.validation.strict)?;
        info!(
            number = %order.number(),
            items = order.item_count(),
            total = %order.total_cost(),
            "Order built"
        );
        reports.push(order.report());
    }

    render::render(&reports, config.output.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("orders")
            .join(name)
    }

    #[test]
    fn test_demo_run() {
        let output = run(&CliConfig::default(), &[]).unwrap();
        assert!(output.starts_with("Order number: 1\n"));
        assert!(output.contains("Order status: Pending"));
        assert!(output.contains("Customer: Ivan Petrov"));
        assert!(output.contains("courier: Ivan Ivanov"));
        assert!(output.contains("- Product 1 (x1)"));
        assert!(output.contains("- Product 2 (x2)"));
        assert!(output.ends_with("Total cost: 200.00"));
    }

    #[test]
    fn test_files_numbered_from_configured_start() {
        let mut config = CliConfig::default();
        config.sequence.start = 100;

        let output = run(
            &config,
            &[sample("shop.toml"), sample("pick-point.toml")],
        )
        .unwrap();
        let blocks: Vec<&str> = output.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Order number: 100\n"));
        assert!(blocks[0].contains("shop delivery to Market Square, 4; shop name: Corner Store"));
        assert!(blocks[1].starts_with("Order number: 101\n"));
        assert!(blocks[1].ends_with("Total cost: 94.90"));
    }

    #[test]
    fn test_json_run() {
        let mut config = CliConfig::default();
        config.output.format = OutputFormat::Json;

        let output = run(&config, &[sample("home.toml")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["total_cost"], 20000);
        assert_eq!(value[0]["status"], "pending");
    }

    #[test]
    fn test_sequence_exhaustion_is_an_error() {
        let mut config = CliConfig::default();
        config.sequence.start = u64::MAX - 1;

        let err = run(&config, &[sample("home.toml"), sample("shop.toml")]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(parcel_core::CoreError::SequenceExhausted)
        ));
    }

    #[test]
    fn test_overflowing_price_is_an_error_in_strict_mode() {
        let path = std::env::temp_dir().join(format!(
            "parcel-order-{}-overflow.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
            [customer]
            name = "A"

            [delivery]
            method = "shop"
            address = "Square 3"
            shop = { name = "S" }

            [[items]]
            name = "Big"
            price = "92233720368547758.07"
            quantity = 2
            "#,
        )
        .unwrap();

        let result = run(&CliConfig::default(), &[path.clone()]);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CliError::Core(parcel_core::CoreError::TotalOverflow { .. }))
        ));
    }

    #[test]
    fn test_missing_order_file() {
        let err = run(&CliConfig::default(), &[sample("nope.toml")]).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
