//! Repository module for database queries
//!
//! Provides typed repository implementations for the procurement and
//! maintenance reference data.

pub mod parts_stock;
pub mod service_manual;

pub use parts_stock::PartsStockRepository;
pub use service_manual::ServiceManualRepository;
