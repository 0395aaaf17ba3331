//! # Domain Types
//!
//! The receipt exactly as a client submitted it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────┐          │
//! │  │       Receipt        │  1      *  │         Item         │          │
//! │  │  ──────────────────  │───────────►│  ──────────────────  │          │
//! │  │  retailer            │            │  short_description   │          │
//! │  │  purchase_date       │            │  price ("6.49")      │          │
//! │  │  purchase_time       │            └──────────────────────┘          │
//! │  │  total ("35.35")     │                                              │
//! │  └──────────┬───────────┘                                              │
//! │             │ validation::validate()                                   │
//! │             ▼                                                           │
//! │  ┌──────────────────────┐                                              │
//! │  │   ValidatedReceipt   │  cached Money for total and every price     │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! ```json
//! {
//!   "retailer": "Walgreens",
//!   "purchaseDate": "2022-01-02",
//!   "purchaseTime": "08:13",
//!   "total": "2.65",
//!   "items": [
//!     {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
//!     {"shortDescription": "Dasani", "price": "1.40"}
//!   ]
//! }
//! ```
//!
//! Missing, `null` or empty fields deserialize to their blank value so the
//! validator can report them. A date or time that is present but malformed
//! is a deserialization error.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Date format on the wire (`2022-01-02`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format on the wire (`13:01`, 24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Item
// =============================================================================

/// A single line entry on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Free-text description, e.g. `"Mountain Dew 12PK"`.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,

    /// Price as submitted, e.g. `"6.49"`.
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt as submitted.
///
/// `None` for the date or time means the field was absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Store name, e.g. `"M&M Corner Market"`.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    #[serde(with = "purchase_date")]
    pub purchase_date: Option<NaiveDate>,

    #[serde(with = "purchase_time")]
    pub purchase_time: Option<NaiveTime>,

    /// Line items in submission order.
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,

    /// Total as submitted, e.g. `"35.35"`.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

// =============================================================================
// Serde Helpers
// =============================================================================

/// `null` reads as the type's blank value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Generates an `Option<T>` serde module for a chrono type with a fixed
/// format; the empty string maps to `None`.
macro_rules! blank_as_none_format {
    ($module:ident, $ty:ty, $format:expr, $expected:literal) => {
        mod $module {
            use super::*;
            use serde::{de, Deserializer, Serializer};

            pub fn serialize<S>(value: &Option<$ty>, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match value {
                    Some(v) => serializer.collect_str(&v.format($format)),
                    None => serializer.serialize_str(""),
                }
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<$ty>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
                if raw.is_empty() {
                    return Ok(None);
                }
                <$ty>::parse_from_str(&raw, $format)
                    .map(Some)
                    .map_err(|_| de::Error::custom(format!(concat!("'{}' is not ", $expected), raw)))
            }
        }
    };
}

blank_as_none_format!(purchase_date, NaiveDate, DATE_FORMAT, "a YYYY-MM-DD date");
blank_as_none_format!(purchase_time, NaiveTime, TIME_FORMAT, "an HH:MM time");

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_receipt() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(
            receipt,
            Receipt {
                retailer: "Walgreens".to_string(),
                purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2),
                purchase_time: NaiveTime::from_hms_opt(8, 13, 0),
                items: vec![Item::new("Pepsi - 12-oz", "1.25"), Item::new("Dasani", "1.40")],
                total: "2.65".to_string(),
            }
        );
    }

    #[test]
    fn test_item_keeps_surrounding_whitespace() {
        let item: Item = serde_json::from_str(
            r#"{"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}"#,
        )
        .unwrap();
        assert_eq!(item, Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"));
    }

    #[test]
    fn test_blank_and_missing_fields_deserialize() {
        let receipt: Receipt = serde_json::from_str(
            r#"{"retailer": "", "purchaseDate": "", "purchaseTime": "", "total": "", "items": []}"#,
        )
        .unwrap();
        assert_eq!(receipt, Receipt::default());

        let receipt: Receipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, Receipt::default());

        let receipt: Receipt =
            serde_json::from_str(r#"{"purchaseDate": null, "purchaseTime": null}"#).unwrap();
        assert!(receipt.purchase_date.is_none());
        assert!(receipt.purchase_time.is_none());
    }

    #[test]
    fn test_null_fields_are_blank() {
        let receipt: Receipt = serde_json::from_str(
            r#"{"retailer": null, "purchaseDate": null, "purchaseTime": null, "total": null, "items": null}"#,
        )
        .unwrap();
        assert_eq!(receipt, Receipt::default());

        let item: Item =
            serde_json::from_str(r#"{"shortDescription": null, "price": null}"#).unwrap();
        assert_eq!(item, Item::default());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(serde_json::from_str::<Receipt>(r#"{"retailer": 7}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": "none"}"#).is_err());
    }

    #[test]
    fn test_malformed_date_and_time_are_rejected() {
        assert!(serde_json::from_str::<Receipt>(r#"{"purchaseDate": "01/02/2022"}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"purchaseDate": "2022-02-30"}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"purchaseTime": "25:00"}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"purchaseTime": "1pm"}"#).is_err());
    }

    #[test]
    fn test_midnight_is_a_real_time() {
        let receipt: Receipt = serde_json::from_str(r#"{"purchaseTime": "00:00"}"#).unwrap();
        assert_eq!(receipt.purchase_time, NaiveTime::from_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_serialize_uses_wire_formats() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 20),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0),
            items: vec![Item::new("Gatorade", "2.25")],
            total: "2.25".to_string(),
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-03-20");
        assert_eq!(value["purchaseTime"], "14:33");
        assert_eq!(value["items"][0]["shortDescription"], "Gatorade");
    }
}
