//! # Receipt Store
//!
//! Concurrency-safe map from receipt id to validated receipt.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Concurrent Handler Access                            │
//! │                                                                         │
//! │  Handler A: insert() ──► write lock ──► map.insert ──► unlock          │
//! │  Handler B: get()    ──► read lock  ──► Arc::clone ──► unlock          │
//! │  Handler C: get()    ──► read lock  ──► Arc::clone ──► unlock          │
//! │                                                                         │
//! │  Readers share the lock; a writer holds it for one map operation.     │
//! │  Receipts sit behind Arc, so a lookup never copies a receipt.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//! Ids are UUID v4 strings. With 122 random bits, collisions are not
//! checked for.

use std::collections::HashMap;
use std::sync::Arc;

use receipt_core::ValidatedReceipt;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Stored Receipt
// =============================================================================

/// A validated receipt bound to its id. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    id: String,
    receipt: Arc<ValidatedReceipt>,
}

impl StoredReceipt {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn receipt(&self) -> &ValidatedReceipt {
        &self.receipt
    }
}

// =============================================================================
// Receipt Store
// =============================================================================

/// In-memory receipt storage.
///
/// Share one instance between handlers with `Arc<ReceiptStore>`.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Arc<ValidatedReceipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Stores a receipt under a freshly generated id.
    ///
    /// ## Returns
    /// The stored record; its id is what clients use to query points.
    pub async fn insert(&self, receipt: ValidatedReceipt) -> StoredReceipt {
        let id = Uuid::new_v4().to_string();
        let receipt = Arc::new(receipt);

        self.receipts
            .write()
            .await
            .insert(id.clone(), Arc::clone(&receipt));

        debug!(id = %id, retailer = %receipt.retailer(), "Stored receipt");

        StoredReceipt { id, receipt }
    }

    /// Looks up a receipt by exact id.
    pub async fn get(&self, id: &str) -> StoreResult<StoredReceipt> {
        let receipt = self
            .receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))?;

        Ok(StoredReceipt {
            id: id.to_string(),
            receipt,
        })
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use receipt_core::{validate, Item, Receipt};
    use std::collections::HashSet;

    fn sample_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2),
            purchase_time: NaiveTime::from_hms_opt(8, 13, 0),
            items: vec![Item::new("Pepsi - 12-oz", "1.25"), Item::new("Dasani", "1.40")],
            total: "2.65".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let store = ReceiptStore::new();
        assert!(store.is_empty().await);

        let receipt = sample_receipt("Walgreens");
        let stored = store.insert(validate(&receipt).unwrap()).await;

        let fetched = store.get(stored.id()).await.unwrap();
        assert_eq!(fetched.id(), stored.id());
        assert_eq!(fetched.receipt().to_receipt(), receipt);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_ids_are_uuids() {
        let store = ReceiptStore::new();
        let stored = store.insert(validate(&sample_receipt("Target")).unwrap()).await;
        assert!(Uuid::parse_str(stored.id()).is_ok());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        store.insert(validate(&sample_receipt("Target")).unwrap()).await;

        let err = store.get("7fb1377b-b223-49d9-a31a-5a02701dd310").await.unwrap_err();
        assert_eq!(err, StoreError::not_found("7fb1377b-b223-49d9-a31a-5a02701dd310"));

        assert!(store.get("").await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_keep_every_receipt() {
        let store = Arc::new(ReceiptStore::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let receipt = sample_receipt(&format!("Retailer {n}"));
                    let stored = store.insert(validate(&receipt).unwrap()).await;
                    // A lookup racing other inserts still sees this entry whole
                    let fetched = store.get(stored.id()).await.unwrap();
                    assert_eq!(fetched.receipt().retailer(), receipt.retailer);
                    stored.id().to_string()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(store.len().await, 64);
    }
}
