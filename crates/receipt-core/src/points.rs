//! # Points Module
//!
//! Reward points for a validated receipt.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                             Points               │
//! │  ───────────────────────────────────────────────  ─────────────────    │
//! │  Each [A-Za-z0-9] character in the retailer       +1 each              │
//! │  Total has no cents and is over 1.00              +50                  │
//! │  Total cents are a multiple of 25, over 1.00      +25                  │
//! │  Every two items                                  +5 per pair          │
//! │  Trimmed description length is a multiple of 3    ceil(price × 0.2)    │
//! │  Purchase day is odd                              +6                   │
//! │  Purchase time after 14:00 and before 16:00       +10                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every amount is read from the `Money` cached during validation, so the
//! rules are exact integer arithmetic. Sums saturate at `u64::MAX`, so any
//! validated receipt scores without overflow.
//!
//! ## Example
//! ```text
//! "M&M Corner Market", 4 × Gatorade 2.25, total 9.00, 2022-03-20 14:33
//!
//!   14  retailer characters (M, M, Corner, Market)
//!   50  round dollar total
//!   25  total is a multiple of 0.25
//!   10  two pairs of items
//!    0  "Gatorade" is 8 characters
//!    0  day 20 is even
//!   10  14:33 is between 14:00 and 16:00
//!  ───
//!  109
//! ```

use chrono::{Datelike, NaiveTime, Timelike};

use crate::money::Money;
use crate::validation::{ValidatedItem, ValidatedReceipt};

// =============================================================================
// Constants
// =============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Totals must exceed this for either cents bonus.
const CENTS_BONUS_THRESHOLD: Money = Money::from_cents(100);

/// Description-length rule multiplier: 0.2 expressed in basis points.
const DESCRIPTION_MULTIPLIER_BPS: i128 = 2_000;

/// Afternoon window in seconds from midnight, both ends exclusive.
const AFTERNOON_START_SECS: u32 = 14 * 60 * 60;
const AFTERNOON_END_SECS: u32 = 16 * 60 * 60;

// =============================================================================
// Breakdown
// =============================================================================

/// Points awarded by each rule. [`PointsBreakdown::total`] is the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of every rule, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Returns the points earned by a receipt.
///
/// Pure: the same receipt always scores the same.
pub fn calculate_points(receipt: &ValidatedReceipt) -> u64 {
    points_breakdown(receipt).total()
}

/// Applies every rule and reports each contribution.
pub fn points_breakdown(receipt: &ValidatedReceipt) -> PointsBreakdown {
    let total = receipt.total();

    PointsBreakdown {
        retailer_name: retailer_name_points(receipt.retailer()),
        round_dollar_total: if is_round_dollar(total) { ROUND_DOLLAR_POINTS } else { 0 },
        quarter_multiple_total: if is_quarter_multiple(total) {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        },
        item_pairs: ITEM_PAIR_POINTS * (receipt.items().len() as u64 / 2),
        item_descriptions: receipt
            .items()
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_purchase_day: if receipt.purchase_date().day() % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon_purchase: if is_afternoon(receipt.purchase_time()) {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn is_round_dollar(total: Money) -> bool {
    total.cents_part() == 0 && total > CENTS_BONUS_THRESHOLD
}

fn is_quarter_multiple(total: Money) -> bool {
    total.cents_part() % 25 == 0 && total > CENTS_BONUS_THRESHOLD
}

/// `ceil(price × 0.2)` when the trimmed description length is a nonzero
/// multiple of 3.
///
/// ## Rounding
/// ```text
/// price × 0.2 = cents × 2000 bps / 10000 / 100
///
/// ceil(a / b) = (a + b - 1) / b      for a ≥ 0
///
/// 12.25 → 1225 × 2000 = 2_450_000 → ceil(/1_000_000) = 3
/// 15.00 → 1500 × 2000 = 3_000_000 → exactly 3, never 4
/// ```
fn item_description_points(item: &ValidatedItem) -> u64 {
    let length = item.short_description().trim().len();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    // i128 keeps cents × bps from overflowing on large prices
    const DIVISOR: i128 = 10_000 * 100;
    let scaled = item.price().cents() as i128 * DESCRIPTION_MULTIPLIER_BPS;
    ((scaled + DIVISOR - 1) / DIVISOR) as u64
}

fn is_afternoon(time: NaiveTime) -> bool {
    let seconds = time.num_seconds_from_midnight();
    seconds > AFTERNOON_START_SECS && seconds < AFTERNOON_END_SECS
}

// =============================================================================
// Unit Tests
// =============================================================================
