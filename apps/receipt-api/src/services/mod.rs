//! Service layer.
//!
//! Orchestrates the core engine and the store; knows nothing about HTTP.

pub mod receipt_service;

pub use receipt_service::{ReceiptService, ServiceError, ServiceResult};
