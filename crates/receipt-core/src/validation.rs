//! # Validation Module
//!
//! Field rules for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extraction (receipt-api)                                │
//! │  ├── JSON shape, camelCase field names                                 │
//! │  └── purchaseDate / purchaseTime parse (YYYY-MM-DD, HH:MM)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Blank checks on every field                                       │
//! │  ├── Character-class rules (retailer, short description)               │
//! │  ├── Amount format + parse into Money (total, item prices)             │
//! │  └── Every rule runs; every failure is collected                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ValidatedReceipt ──► receipt-store, points                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Separate Validated Type?
//! Only [`validate`] can build a [`ValidatedReceipt`], and the points rules
//! only accept one. A receipt whose amounts were never parsed cannot be
//! scored or stored.
//!
//! ## Usage
//! ```rust
//! use receipt_core::{validate, Item, Receipt, ViolationKind};
//!
//! let receipt = Receipt {
//!     retailer: "".to_string(),
//!     items: vec![Item::new("Dasani", "1.40")],
//!     total: "".to_string(),
//!     ..Receipt::default()
//! };
//!
//! let err = validate(&receipt).unwrap_err();
//! assert!(err.contains(ViolationKind::RetailerBlank));
//! assert!(err.contains(ViolationKind::TotalBlank));
//! assert!(err.contains(ViolationKind::PurchaseDateBlank));
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, Violation, ViolationKind};
use crate::money::Money;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validated Types
// =============================================================================

/// An item whose description and price passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    item: Item,
    price: Money,
}

impl ValidatedItem {
    pub fn short_description(&self) -> &str {
        &self.item.short_description
    }

    /// Price parsed during validation.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// The item as submitted.
    pub fn item(&self) -> &Item {
        &self.item
    }
}

/// A receipt that passed every rule, with its amounts parsed.
///
/// ## Invariants
/// - `retailer` is non-empty and matches `^[\w\s\-&]+$`
/// - `items` is non-empty and every item passed its own rules
/// - `total` is the exact cent value of `total_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<ValidatedItem>,
    total_text: String,
    total: Money,
}

impl ValidatedReceipt {
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    pub fn items(&self) -> &[ValidatedItem] {
        &self.items
    }

    /// Total parsed during validation.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Rebuilds the receipt exactly as it was submitted.
    pub fn to_receipt(&self) -> Receipt {
        Receipt {
            retailer: self.retailer.clone(),
            purchase_date: Some(self.purchase_date),
            purchase_time: Some(self.purchase_time),
            items: self.items.iter().map(|i| i.item.clone()).collect(),
            total: self.total_text.clone(),
        }
    }
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a receipt and parses its amounts.
///
/// ## Rules (in order)
/// 1. retailer non-empty, then `^[\w\s\-&]+$`
/// 2. purchase date present
/// 3. purchase time present
/// 4. at least one item
/// 5. total non-empty, then `^\d+\.\d{2}$`
/// 6. every item: description non-empty then `^[\w\s\-]+$`;
///    price non-empty then `^\d+\.\d{2}$`
///
/// No rule short-circuits another. On failure the error lists every
/// violation in the order above.
///
/// ## User Workflow
/// ```text
/// POST /receipts/process
///      │
///      ▼
/// validate(&receipt) ← THIS FUNCTION
///      │
///      ├── Err(ValidationError) → 400 with every violation
///      │
///      └── Ok(ValidatedReceipt) → store.insert() → {"id": ...}
/// ```
pub fn validate(receipt: &Receipt) -> ValidationResult<ValidatedReceipt> {
    let mut violations = Vec::new();

    validate_retailer(&receipt.retailer, &mut violations);

    if receipt.purchase_date.is_none() {
        violations.push(Violation::blank(ViolationKind::PurchaseDateBlank, "purchaseDate"));
    }

    if receipt.purchase_time.is_none() {
        violations.push(Violation::blank(ViolationKind::PurchaseTimeBlank, "purchaseTime"));
    }

    if receipt.items.is_empty() {
        violations.push(Violation::blank(ViolationKind::ItemsEmpty, "items"));
    }

    let total = validate_amount(&receipt.total, "total", ViolationKind::TotalBlank, &mut violations);

    let items: Vec<Option<ValidatedItem>> = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item, &mut violations))
        .collect();

    match (receipt.purchase_date, receipt.purchase_time, total) {
        (Some(purchase_date), Some(purchase_time), Some(total)) if violations.is_empty() => {
            Ok(ValidatedReceipt {
                retailer: receipt.retailer.clone(),
                purchase_date,
                purchase_time,
                items: items.into_iter().flatten().collect(),
                total_text: receipt.total.clone(),
                total,
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

// =============================================================================
// Field Validators
// =============================================================================

fn validate_retailer(retailer: &str, violations: &mut Vec<Violation>) {
    if is_blank(retailer) {
        violations.push(Violation::blank(ViolationKind::RetailerBlank, "retailer"));
    } else if !matches_retailer(retailer) {
        violations.push(Violation::invalid(ViolationKind::RetailerInvalid, "retailer", retailer));
    }
}

/// Validates one item; violations are tagged `items[index].<field>`.
fn validate_item(index: usize, item: &Item, violations: &mut Vec<Violation>) -> Option<ValidatedItem> {
    let description_field = format!("items[{index}].shortDescription");
    let description_ok = if is_blank(&item.short_description) {
        violations.push(
            Violation::blank(ViolationKind::ItemShortDescriptionBlank, description_field)
                .at_item(index),
        );
        false
    } else if !matches_short_description(&item.short_description) {
        violations.push(
            Violation::invalid(
                ViolationKind::ItemShortDescriptionInvalid,
                description_field,
                item.short_description.as_str(),
            )
            .at_item(index),
        );
        false
    } else {
        true
    };

    let mut price_violations = Vec::new();
    let price = validate_amount(
        &item.price,
        &format!("items[{index}].price"),
        ViolationKind::ItemPriceBlank,
        &mut price_violations,
    );
    violations.extend(price_violations.into_iter().map(|v| v.at_item(index)));

    match price {
        Some(price) if description_ok => Some(ValidatedItem {
            item: item.clone(),
            price,
        }),
        _ => None,
    }
}

/// Blank check, then format check, then parse. Only the empty string is
/// blank; whitespace falls through to the format check.
fn validate_amount(
    raw: &str,
    field: &str,
    blank_kind: ViolationKind,
    violations: &mut Vec<Violation>,
) -> Option<Money> {
    if is_blank(raw) {
        violations.push(Violation::blank(blank_kind, field));
        return None;
    }

    match raw.parse::<Money>() {
        Ok(money) => Some(money),
        Err(_) => {
            violations.push(Violation::invalid(ViolationKind::PriceFormatInvalid, field, raw));
            None
        }
    }
}

// =============================================================================
// Character Classes
// =============================================================================
// ASCII regex semantics: \w = [A-Za-z0-9_], \s = [ \t\n\x0C\r]

fn is_blank(value: &str) -> bool {
    value.is_empty()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `^[\w\s\-&]+$`
fn matches_retailer(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || c.is_ascii_whitespace() || c == '-' || c == '&')
}

/// `^[\w\s\-]+$`
fn matches_short_description(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || c.is_ascii_whitespace() || c == '-')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn kinds(err: &ValidationError) -> Vec<ViolationKind> {
        err.violations().iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_all_blank_fields_reported_together() {
        let err = validate(&Receipt::default()).unwrap_err();

        assert_eq!(
            kinds(&err),
            vec![
                ViolationKind::RetailerBlank,
                ViolationKind::PurchaseDateBlank,
                ViolationKind::PurchaseTimeBlank,
                ViolationKind::ItemsEmpty,
                ViolationKind::TotalBlank,
            ]
        );
        assert!(err.contains(ViolationKind::ReceiptInvalid));
        assert!(!err.contains(ViolationKind::ItemInvalid));
    }

    #[test]
    fn test_invalid_retailer_and_total_format() {
        let receipt = Receipt {
            retailer: "23456715215!".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![Item::new("test-item", "1.00")],
            total: "00000".to_string(),
        };

        let err = validate(&receipt).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![ViolationKind::RetailerInvalid, ViolationKind::PriceFormatInvalid]
        );
        assert_eq!(err.violations()[0].value.as_deref(), Some("23456715215!"));
        assert_eq!(err.violations()[1].field, "total");
    }

    #[test]
    fn test_valid_receipt_caches_amounts() {
        let receipt = Receipt {
            retailer: "w-s&".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![Item::new("test-item", "1.25"), Item::new("Dasani", "1.40")],
            total: "42.00".to_string(),
        };

        let validated = validate(&receipt).unwrap();
        assert_eq!(validated.total().cents(), 4200);
        assert_eq!(validated.items()[0].price().cents(), 125);
        assert_eq!(validated.items()[1].price().cents(), 140);
        assert_eq!(validated.purchase_date(), NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(validated.to_receipt(), receipt);
    }

    #[test]
    fn test_item_violations_carry_index_and_marker() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![
                Item::new("fine", "1.00"),
                Item::new("", ""),
                Item::new("&&-wasfdn", "0000000"),
            ],
            total: "1.00".to_string(),
        };

        let err = validate(&receipt).unwrap_err();
        assert!(err.contains(ViolationKind::ItemInvalid));
        assert_eq!(
            kinds(&err),
            vec![
                ViolationKind::ItemShortDescriptionBlank,
                ViolationKind::ItemPriceBlank,
                ViolationKind::ItemShortDescriptionInvalid,
                ViolationKind::PriceFormatInvalid,
            ]
        );
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "items[1].shortDescription",
                "items[1].price",
                "items[2].shortDescription",
                "items[2].price",
            ]
        );
    }

    #[test]
    fn test_price_format_rules() {
        for bad in ["1.005", "1.5", "1", ".99", "1.0O", "$1.00"] {
            let receipt = Receipt {
                retailer: "Target".to_string(),
                purchase_date: date(2022, 1, 1),
                purchase_time: time(13, 1),
                items: vec![Item::new("Dasani", bad)],
                total: bad.to_string(),
            };
            let err = validate(&receipt).unwrap_err();
            assert_eq!(
                kinds(&err),
                vec![ViolationKind::PriceFormatInvalid, ViolationKind::PriceFormatInvalid],
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_whitespace_only_text_is_not_blank() {
        let receipt = Receipt {
            retailer: "   ".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![Item::new(" \t ", "5.00")],
            total: "5.00".to_string(),
        };
        let validated = validate(&receipt).unwrap();
        assert_eq!(validated.retailer(), "   ");
        assert_eq!(validated.items()[0].short_description(), " \t ");
    }

    #[test]
    fn test_whitespace_only_amounts_are_malformed() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![Item::new("Dasani", "  ")],
            total: " ".to_string(),
        };
        let err = validate(&receipt).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![ViolationKind::PriceFormatInvalid, ViolationKind::PriceFormatInvalid]
        );
        assert_eq!(err.violations()[0].item, None);
        assert_eq!(err.violations()[1].item, Some(0));
    }

    #[test]
    fn test_largest_amount_is_accepted() {
        let max = Money::from_cents(i64::MAX).to_string();
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: date(2022, 1, 1),
            purchase_time: time(13, 1),
            items: vec![Item::new("abc", max.as_str())],
            total: max.clone(),
        };
        let validated = validate(&receipt).unwrap();
        assert_eq!(validated.total().cents(), i64::MAX);
    }

    #[test]
    fn test_character_classes() {
        assert!(matches_retailer("M&M Corner Market"));
        assert!(matches_retailer("under_score\tand-dash"));
        assert!(!matches_retailer("Target!"));
        assert!(!matches_retailer("Café"));

        assert!(matches_short_description("   Klarbrunn 12-PK 12 FL OZ  "));
        assert!(matches_short_description("Pepsi - 12-oz"));
        assert!(!matches_short_description("M&M"));
        assert!(!matches_short_description("12.5 oz"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: date(2022, 1, 2),
            purchase_time: time(8, 13),
            items: vec![Item::new("Pepsi - 12-oz", "1.25"), Item::new("Dasani", "1.40")],
            total: "2.65".to_string(),
        };
        assert_eq!(validate(&receipt).unwrap(), validate(&receipt).unwrap());
    }
}
