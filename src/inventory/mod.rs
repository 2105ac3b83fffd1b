//! Inventory domain: product records and the in-memory store.

pub mod models;
pub mod store;

pub use models::{AggregateReport, Product};
pub use store::{Store, StoreError};
