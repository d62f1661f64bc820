//! # Order Files
//!
//! TOML description of one order, turned into a `parcel_core::Order`.
//!
//! ## File Format
//! ```toml
//! [customer]
//! name = "Ivan Petrov"
//! email = "petrov@mail.com"        # optional
//! phone_number = "1234567890"      # optional
//! address = "Pushkin Street, 1"    # optional
//!
//! [delivery]
//! method = "home"                  # home | pick_point | shop
//! address = "Lenin Street, 123"
//! courier = { name = "Ivan Ivanov" }   # pick_point: point = {...}, shop: shop = {...}
//!
//! [[items]]
//! name = "Product 1"
//! description = "Description of product 1"   # optional
//! price = "100.00"                 # decimal string, or a whole number
//! quantity = 1                     # optional, defaults to 1
//! ```
//!
//! The `method` tag selects which point table is read. Any other key in
//! `[delivery]`, such as a `shop` table on a home delivery, is rejected when
//! the file is parsed.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use parcel_core::{
    Customer, Delivery, Money, MoneyParseError, Order, OrderNumberSequence, Product,
};

use crate::error::{CliError, CliResult};

/// The order run when no files are given.
const DEMO_ORDER: &str = include_str!("../orders/home.toml");

/// Item price as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    /// `"100.00"`
    Decimal(String),
    /// `100`, whole currency units
    Whole(i64),
}

impl PriceField {
    pub fn to_money(&self) -> Result<Money, MoneyParseError> {
        match self {
            PriceField::Decimal(text) => text.parse(),
            PriceField::Whole(units) => units
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| MoneyParseError::Overflow(units.to_string())),
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Decimal(text) => f.write_str(text),
            PriceField::Whole(units) => write!(f, "{}", units),
        }
    }
}

/// One `[[items]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceField,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl ItemEntry {
    pub fn to_product(&self) -> CliResult<Product> {
        let price = self.price.to_money().map_err(|source| CliError::InvalidPrice {
            item: self.name.clone(),
            value: self.price.to_string(),
            source,
        })?;

        Ok(Product::new(
            self.name.clone(),
            self.description.clone(),
            price,
            self.quantity,
        ))
    }
}

/// A whole order file.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderFile {
    pub customer: Customer,
    pub delivery: Delivery,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

impl OrderFile {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn read(path: &Path) -> CliResult<Self> {
        debug!(?path, "Reading order file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in example: a home delivery with two products.
    pub fn demo() -> CliResult<Self> {
        Self::from_toml_str(DEMO_ORDER).map_err(|source| CliError::Parse {
            path: PathBuf::from("orders/home.toml"),
            source,
        })
    }

    /// Builds the order, numbering it from `sequence`.
    ///
    /// With `strict`, the customer, the delivery and every item are
    /// validated and the first failure is returned. Without it, input is
    /// accepted as-is (only unreadable prices fail).
    pub fn build_order(self, sequence: &OrderNumberSequence, strict: bool) -> CliResult<Order> {
        let products = self
            .items
            .iter()
            .map(ItemEntry::to_product)
            .collect::<CliResult<Vec<_>>>()?;

        if strict {
            self.customer.validate()?;
            self.delivery.validate()?;
        }

        let mut order = Order::try_with_sequence(self.delivery, self.customer, sequence)?;
        for product in products {
            if strict {
                order.try_add_item(product)?;
            } else {
                order.add_item(product);
            }
        }

        Ok(order)
    }
}
