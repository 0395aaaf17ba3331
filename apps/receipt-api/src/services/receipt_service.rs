//! Receipt service: submission and points queries.
//!
//! ## Flow
//! ```text
//! process_receipt(receipt)                receipt_points(id)
//!      │                                       │
//!      ▼                                       ▼
//! validate() ──Err──► ValidationFailed    store.get(id) ──Err──► NotFound
//!      │ Ok                                    │ Ok
//!      ▼                                       ▼
//! store.insert() ──► id                   points_breakdown() ──► total
//! ```
//!
//! Nothing reaches the store or the calculator without passing
//! `receipt_core::validate` first.

use std::sync::Arc;

use receipt_core::{points_breakdown, validate, Receipt, ValidationError};
use receipt_store::{ReceiptStore, StoreError};
use tracing::{debug, info, warn};

/// Service-level failures. Categorized, with no transport concepts.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),

    #[error("no receipt found with id {id}")]
    NotFound { id: String },
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ServiceError::NotFound { id },
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Composition root for the receipt workflow.
#[derive(Debug, Clone)]
pub struct ReceiptService {
    store: Arc<ReceiptStore>,
}

impl ReceiptService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        ReceiptService { store }
    }

    /// Validates and stores a receipt, returning its new id.
    pub async fn process_receipt(&self, receipt: &Receipt) -> ServiceResult<String> {
        let validated = match validate(receipt) {
            Ok(validated) => validated,
            Err(err) => {
                warn!(
                    violations = err.violations().len(),
                    details = %err.detailed_message(),
                    "Rejected receipt"
                );
                return Err(err.into());
            }
        };

        let stored = self.store.insert(validated).await;

        info!(
            id = %stored.id(),
            retailer = %receipt.retailer,
            items = receipt.items.len(),
            "Processed receipt"
        );

        Ok(stored.id().to_string())
    }

    /// Computes the points for a stored receipt.
    pub async fn receipt_points(&self, id: &str) -> ServiceResult<u64> {
        let stored = self.store.get(id).await.map_err(|err| {
            debug!(id = %id, "Points requested for unknown receipt");
            ServiceError::from(err)
        })?;

        let breakdown = points_breakdown(stored.receipt());
        let points = breakdown.total();

        debug!(id = %id, ?breakdown, points, "Calculated points");

        Ok(points)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use receipt_core::{Item, ViolationKind};

    fn service() -> ReceiptService {
        ReceiptService::new(Arc::new(ReceiptStore::new()))
    }

    fn corner_market() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 20),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0),
            items: vec![Item::new("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_then_score() {
        let service = service();
        let id = service.process_receipt(&corner_market()).await.unwrap();
        assert_eq!(service.receipt_points(&id).await.unwrap(), 109);
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_not_stored() {
        let store = Arc::new(ReceiptStore::new());
        let service = ReceiptService::new(Arc::clone(&store));

        let receipt = Receipt {
            retailer: String::new(),
            total: String::new(),
            ..corner_market()
        };

        match service.process_receipt(&receipt).await {
            Err(ServiceError::ValidationFailed(err)) => {
                assert!(err.contains(ViolationKind::RetailerBlank));
                assert!(err.contains(ViolationKind::TotalBlank));
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let err = service().receipt_points("does-not-exist").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { ref id } if id == "does-not-exist"));
    }

    #[tokio::test]
    async fn test_same_receipt_twice_gets_two_ids() {
        let service = service();
        let first = service.process_receipt(&corner_market()).await.unwrap();
        let second = service.process_receipt(&corner_market()).await.unwrap();
        assert_ne!(first, second);
    }
}
