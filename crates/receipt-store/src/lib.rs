//! # receipt-store: Receipt Storage for the Receipt Processor
//!
//! Keeps every accepted receipt in memory, keyed by a generated id.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  receipt_core::validate() ──► ValidatedReceipt                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ReceiptStore                                                  │   │
//! │  │   ├── insert(receipt) → StoredReceipt { id, receipt }          │   │
//! │  │   └── get(id)         → StoredReceipt | StoreError::NotFound   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /receipts/{id}/points ──► receipt_core::calculate_points()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted: receipts live until the process exits. There is no
//! update or delete.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! let stored = store.insert(validated).await;
//! let again = store.get(stored.id()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{ReceiptStore, StoredReceipt};
