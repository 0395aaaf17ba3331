//! # Error Types
//!
//! Validation failures for submitted receipts.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ViolationKind    - One named rule (RetailerBlank, ItemsEmpty, ...)│
//! │  ├── Violation        - A kind + the field path + offending value      │
//! │  └── ValidationError  - Every violation found in one receipt           │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Unknown receipt id                             │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  ├── ServiceError     - ValidationFailed / NotFound                    │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → ApiError → 400 response        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Validation never stops at the first problem; the caller gets them all
//! 2. Every violation is a tagged value, so membership is a cheap lookup
//! 3. `ValidationError` always reports [`ViolationKind::ReceiptInvalid`];
//!    it reports [`ViolationKind::ItemInvalid`] when any item failed

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Violation Kind
// =============================================================================

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Marker present on every failed receipt.
    #[error("invalid receipt")]
    ReceiptInvalid,

    #[error("receipt retailer cannot be blank")]
    RetailerBlank,

    /// Retailer contains something other than word characters,
    /// whitespace, `-` or `&`.
    #[error("invalid receipt retailer")]
    RetailerInvalid,

    #[error("receipt purchase date cannot be blank")]
    PurchaseDateBlank,

    #[error("receipt purchase time cannot be blank")]
    PurchaseTimeBlank,

    #[error("receipt must have items")]
    ItemsEmpty,

    #[error("receipt total cannot be blank")]
    TotalBlank,

    /// Marker present when at least one item failed.
    #[error("invalid item")]
    ItemInvalid,

    #[error("item short description cannot be blank")]
    ItemShortDescriptionBlank,

    /// Description contains something other than word characters,
    /// whitespace or `-`.
    #[error("invalid item short description")]
    ItemShortDescriptionInvalid,

    #[error("item price cannot be blank")]
    ItemPriceBlank,

    /// A total or item price is not `digits.dd`.
    #[error("invalid price format")]
    PriceFormatInvalid,
}

// =============================================================================
// Violation
// =============================================================================

/// One failed rule, located on the receipt.
///
/// ## Field Paths
/// ```text
/// retailer              receipt-level field
/// total                 receipt-level field
/// items[2].price        third item's price
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,

    /// Dotted path of the offending field.
    pub field: String,

    /// The rejected value, for pattern mismatches only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Position of the offending item, for item-level rules.
    #[serde(skip)]
    pub item: Option<usize>,
}

impl Violation {
    /// A violation for a blank or missing field.
    pub fn blank(kind: ViolationKind, field: impl Into<String>) -> Self {
        Violation {
            kind,
            field: field.into(),
            value: None,
            item: None,
        }
    }

    /// A violation for a value that failed its pattern.
    pub fn invalid(kind: ViolationKind, field: impl Into<String>, value: impl Into<String>) -> Self {
        Violation {
            kind,
            field: field.into(),
            value: Some(value.into()),
            item: None,
        }
    }

    /// Attaches the violation to the item at `index`.
    pub fn at_item(mut self, index: usize) -> Self {
        self.item = Some(index);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {:?} is an {}", self.field, value, self.kind),
            None => write!(f, "{}: {}", self.field, self.kind),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Every violation found while validating one receipt, in rule order.
///
/// ## Example
/// ```rust
/// use receipt_core::{validate, Receipt, ViolationKind};
///
/// let err = validate(&Receipt::default()).unwrap_err();
/// assert!(err.contains(ViolationKind::ReceiptInvalid));
/// assert!(err.contains(ViolationKind::RetailerBlank));
/// assert!(err.contains(ViolationKind::ItemsEmpty));
/// assert!(!err.contains(ViolationKind::ItemInvalid));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid receipt")]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wraps a non-empty list of violations.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        ValidationError { violations }
    }

    /// The individual violations, in the order the rules ran.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any item-level rule failed.
    pub fn has_item_violations(&self) -> bool {
        self.violations.iter().any(|v| v.item.is_some())
    }

    /// Checks membership of a violation kind, including the
    /// `ReceiptInvalid`/`ItemInvalid` markers.
    pub fn contains(&self, kind: ViolationKind) -> bool {
        match kind {
            ViolationKind::ReceiptInvalid => true,
            ViolationKind::ItemInvalid => self.has_item_violations(),
            _ => self.violations.iter().any(|v| v.kind == kind),
        }
    }

    /// `"invalid receipt: retailer: receipt retailer cannot be blank; ..."`
    pub fn detailed_message(&self) -> String {
        let details: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        format!("{}: {}", self, details.join("; "))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let blank = Violation::blank(ViolationKind::RetailerBlank, "retailer");
        assert_eq!(blank.to_string(), "retailer: receipt retailer cannot be blank");

        let invalid = Violation::invalid(ViolationKind::PriceFormatInvalid, "total", "1.005");
        assert_eq!(invalid.to_string(), "total: \"1.005\" is an invalid price format");
    }

    #[test]
    fn test_markers() {
        let receipt_only = ValidationError::new(vec![Violation::blank(ViolationKind::TotalBlank, "total")]);
        assert!(receipt_only.contains(ViolationKind::ReceiptInvalid));
        assert!(receipt_only.contains(ViolationKind::TotalBlank));
        assert!(!receipt_only.contains(ViolationKind::ItemInvalid));

        let with_item = ValidationError::new(vec![
            Violation::blank(ViolationKind::ItemPriceBlank, "items[0].price").at_item(0)
        ]);
        assert!(with_item.contains(ViolationKind::ItemInvalid));
        assert!(with_item.contains(ViolationKind::ItemPriceBlank));
        assert_eq!(with_item.violations()[0].item, Some(0));
    }

    #[test]
    fn test_item_marker_follows_index_not_path() {
        let path_only = ValidationError::new(vec![Violation::invalid(
            ViolationKind::PriceFormatInvalid,
            "items[3].price",
            "1.5",
        )]);
        assert!(!path_only.has_item_violations());

        let indexed = ValidationError::new(vec![
            Violation::invalid(ViolationKind::PriceFormatInvalid, "price", "1.5").at_item(3)
        ]);
        assert!(indexed.has_item_violations());
        assert!(indexed.contains(ViolationKind::ItemInvalid));
    }

    #[test]
    fn test_detailed_message() {
        let err = ValidationError::new(vec![
            Violation::blank(ViolationKind::RetailerBlank, "retailer"),
            Violation::blank(ViolationKind::TotalBlank, "total"),
        ]);
        assert_eq!(err.to_string(), "invalid receipt");
        assert_eq!(
            err.detailed_message(),
            "invalid receipt: retailer: receipt retailer cannot be blank; total: receipt total cannot be blank"
        );
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_value(ViolationKind::PurchaseDateBlank).unwrap();
        assert_eq!(json, "PURCHASE_DATE_BLANK");

        let json = serde_json::to_value(Violation::blank(ViolationKind::ItemsEmpty, "items")).unwrap();
        assert_eq!(json["kind"], "ITEMS_EMPTY");
        assert!(json.get("value").is_none());
        assert!(json.get("item").is_none());
    }
}
