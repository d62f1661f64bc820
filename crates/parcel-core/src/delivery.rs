//! # Delivery
//!
//! How an order reaches its recipient: an address plus the point that hands
//! the parcel over.
//!
//! ## Variant Pairing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Delivery variant        Hand-off point        Display label           │
//! │  ────────────────        ──────────────        ─────────────           │
//! │  Delivery::Home      ──► Courier          ──►  "courier: {name}"       │
//! │  Delivery::PickPoint ──► PickPoint        ──►  "point name: {name}"    │
//! │  Delivery::Shop      ──► Shop             ──►  "shop name: {name}"     │
//! │                                                                         │
//! │  Each variant only accepts its own point type, so a home delivery      │
//! │  handed to a shop does not compile. Order files are tagged by          │
//! │  `method` and reject unknown fields, which gives the same guarantee    │
//! │  at deserialization.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use parcel_core::delivery::{Courier, Delivery};
//!
//! let delivery = Delivery::home("Street 1", Courier::new("Bob"));
//! assert_eq!(
//!     delivery.display_address(),
//!     "home delivery to Street 1; courier: Bob"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::validation::{validate_name, validate_required, ValidationResult};

/// Auxiliary text shared by every delivery method.
pub const DELIVERY_INFO: &str = "additional delivery information";

// =============================================================================
// Delivery Kind
// =============================================================================

/// Which of the three delivery methods a [`Delivery`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    Home,
    PickPoint,
    Shop,
}

impl DeliveryKind {
    /// Stable lowercase identifier, matching the serde tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryKind::Home => "home",
            DeliveryKind::PickPoint => "pick_point",
            DeliveryKind::Shop => "shop",
        }
    }
}

impl fmt::Display for DeliveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Delivery Points
// =============================================================================

/// A named physical or human hand-off target.
pub trait DeliveryPoint {
    /// Name shown in the delivery description.
    fn name(&self) -> &str;

    /// The delivery method this point serves.
    fn kind(&self) -> DeliveryKind;
}

/// The person carrying a home delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Courier {
    name: String,
}

impl Courier {
    pub fn new(name: impl Into<String>) -> Self {
        Courier { name: name.into() }
    }
}

impl DeliveryPoint for Courier {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DeliveryKind {
        DeliveryKind::Home
    }
}

/// A pick-up point where the customer collects the parcel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickPoint {
    name: String,
}

impl PickPoint {
    pub fn new(name: impl Into<String>) -> Self {
        PickPoint { name: name.into() }
    }
}

impl DeliveryPoint for PickPoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DeliveryKind {
        DeliveryKind::PickPoint
    }
}

/// A retail shop that holds the parcel for collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shop {
    name: String,
}

impl Shop {
    pub fn new(name: impl Into<String>) -> Self {
        Shop { name: name.into() }
    }
}

impl DeliveryPoint for Shop {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DeliveryKind {
        DeliveryKind::Shop
    }
}

// =============================================================================
// Delivery
// =============================================================================

/// The delivery method chosen for an order.
///
/// Immutable once built; an [`Order`](crate::order::Order) keeps the same
/// delivery for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case", deny_unknown_fields)]
pub enum Delivery {
    /// Courier brings the parcel to the customer's door.
    Home { address: String, courier: Courier },
    /// Customer collects the parcel at a pick-up point.
    PickPoint { address: String, point: PickPoint },
    /// Customer collects the parcel at a retail shop.
    Shop { address: String, shop: Shop },
}

impl Delivery {
    pub fn home(address: impl Into<String>, courier: Courier) -> Self {
        Delivery::Home {
            address: address.into(),
            courier,
        }
    }

    pub fn pick_point(address: impl Into<String>, point: PickPoint) -> Self {
        Delivery::PickPoint {
            address: address.into(),
            point,
        }
    }

    pub fn shop(address: impl Into<String>, shop: Shop) -> Self {
        Delivery::Shop {
            address: address.into(),
            shop,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Delivery::Home { address, .. }
            | Delivery::PickPoint { address, .. }
            | Delivery::Shop { address, .. } => address,
        }
    }

    /// The hand-off point, whatever its concrete type.
    pub fn point(&self) -> &dyn DeliveryPoint {
        match self {
            Delivery::Home { courier, .. } => courier,
            Delivery::PickPoint { point, .. } => point,
            Delivery::Shop { shop, .. } => shop,
        }
    }

    pub fn kind(&self) -> DeliveryKind {
        self.point().kind()
    }

    pub fn point_name(&self) -> &str {
        self.point().name()
    }

    /// The courier, for home deliveries only.
    pub fn courier(&self) -> Option<&Courier> {
        match self {
            Delivery::Home { courier, .. } => Some(courier),
            _ => None,
        }
    }

    /// Human-readable description; wording depends on the variant.
    pub fn display_address(&self) -> String {
        match self {
            Delivery::Home { address, courier } => {
                format!("home delivery to {}; courier: {}", address, courier.name())
            }
            Delivery::PickPoint { address, point } => format!(
                "pick-up-point delivery to {}; point name: {}",
                address,
                point.name()
            ),
            Delivery::Shop { address, shop } => {
                format!("shop delivery to {}; shop name: {}", address, shop.name())
            }
        }
    }

    /// Same text for every variant.
    pub fn delivery_info(&self) -> &'static str {
        DELIVERY_INFO
    }

    /// Rejects an empty address or an empty point name.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("address", self.address())?;

        let field = match self.kind() {
            DeliveryKind::Home => "courier name",
            DeliveryKind::PickPoint => "pick-up point name",
            DeliveryKind::Shop => "shop name",
        };
        validate_name(field, self.point_name())
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_address())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_display_address_per_variant() {
        let home = Delivery::home("Street 1", Courier::new("Bob"));
        assert_eq!(home.display_address(), "home delivery to Street 1; courier: Bob");

        let pick = Delivery::pick_point("Mall 2", PickPoint::new("Box 17"));
        assert_eq!(
            pick.display_address(),
            "pick-up-point delivery to Mall 2; point name: Box 17"
        );

        let shop = Delivery::shop("Square 3", Shop::new("Corner Store"));
        assert_eq!(
            shop.display_address(),
            "shop delivery to Square 3; shop name: Corner Store"
        );
    }

    #[test]
    fn test_same_fields_same_text() {
        let a = Delivery::shop("Square 3", Shop::new("Corner Store"));
        let b = Delivery::shop("Square 3", Shop::new("Corner Store"));
        assert_eq!(a.display_address(), b.display_address());
        assert_eq!(a.to_string(), b.display_address());
    }

    #[test]
    fn test_kind_and_point() {
        let home = Delivery::home("Street 1", Courier::new("Bob"));
        assert_eq!(home.kind(), DeliveryKind::Home);
        assert_eq!(home.point_name(), "Bob");
        assert_eq!(home.address(), "Street 1");
        assert_eq!(home.courier(), Some(&Courier::new("Bob")));

        let pick = Delivery::pick_point("Mall 2", PickPoint::new("Box 17"));
        assert_eq!(pick.kind(), DeliveryKind::PickPoint);
        assert_eq!(pick.courier(), None);

        let shop = Delivery::shop("Square 3", Shop::new("Corner Store"));
        assert_eq!(shop.kind(), DeliveryKind::Shop);
        assert_eq!(shop.point_name(), "Corner Store");
    }

    #[test]
    fn test_delivery_info_is_constant() {
        let deliveries = [
            Delivery::home("a", Courier::new("b")),
            Delivery::pick_point("a", PickPoint::new("b")),
            Delivery::shop("a", Shop::new("b")),
        ];
        for delivery in &deliveries {
            assert_eq!(delivery.delivery_info(), "additional delivery information");
        }
    }

    #[test]
    fn test_empty_address_accepted_but_fails_validation() {
        let delivery = Delivery::home("", Courier::new("Bob"));
        assert_eq!(delivery.display_address(), "home delivery to ; courier: Bob");
        assert_eq!(
            delivery.validate(),
            Err(ValidationError::Required {
                field: "address".to_string()
            })
        );
    }

    #[test]
    fn test_empty_point_name_fails_validation() {
        let delivery = Delivery::shop("Square 3", Shop::new(" "));
        assert_eq!(
            delivery.validate(),
            Err(ValidationError::Required {
                field: "shop name".to_string()
            })
        );
        assert!(Delivery::shop("Square 3", Shop::new("S")).validate().is_ok());
    }

    #[test]
    fn test_serde_tagged_by_method() {
        let delivery = Delivery::pick_point("Mall 2", PickPoint::new("Box 17"));
        let json = serde_json::to_value(&delivery).unwrap();
        assert_eq!(json["method"], "pick_point");
        assert_eq!(json["point"]["name"], "Box 17");

        let back: Delivery = serde_json::from_value(json).unwrap();
        assert_eq!(back, delivery);
    }

    #[test]
    fn test_serde_rejects_mismatched_point() {
        let json = r#"{"method":"home","address":"Street 1","shop":{"name":"S"}}"#;
        assert!(serde_json::from_str::<Delivery>(json).is_err());
    }

    #[test]
    fn test_serde_rejects_extra_point_table() {
        let json = r#"{"method":"home","address":"Street 1","courier":{"name":"Bob"},"shop":{"name":"S"}}"#;
        let err = serde_json::from_str::<Delivery>(json).unwrap_err();
        assert!(err.to_string().contains("shop"));

        let json = r#"{"method":"shop","address":"Square 3","shop":{"name":"S","phone":"1"}}"#;
        assert!(serde_json::from_str::<Delivery>(json).is_err());
    }
}
