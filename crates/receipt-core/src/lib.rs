//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate validates submitted receipts and scores them. Everything here
//! is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                HTTP API (apps/receipt-api)                      │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation │  │  points  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  validate  │  │ calculate│  │   │
//! │  │   │   Item    │  │ (cents)   │  │ Validated* │  │ breakdown│  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (in-memory map)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item as submitted
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Violation and validation error types
//! - [`validation`] - Field rules, producing a [`ValidatedReceipt`]
//! - [`points`] - Reward points rules
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use receipt_core::{calculate_points, validate, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2),
//!     purchase_time: NaiveTime::from_hms_opt(13, 13, 0),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//!     total: "1.25".to_string(),
//! };
//!
//! let validated = validate(&receipt).unwrap();
//! // 6 retailer characters + 25 for a quarter-multiple total
//! assert_eq!(calculate_points(&validated), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, Violation, ViolationKind};
pub use money::Money;
pub use points::{calculate_points, points_breakdown, PointsBreakdown};
pub use types::{Item, Receipt};
pub use validation::{validate, ValidatedItem, ValidatedReceipt};
