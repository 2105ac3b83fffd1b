//! invctl - Console-driven in-memory inventory manager
//!
//! Holds a small set of product records in memory and lets an operator list,
//! search, add, remove, and reprice them through a numbered menu. State lives
//! in one process and is gone on exit.

pub mod config;
pub mod format;
pub mod inventory;
pub mod session;

pub use config::{Config, OutputFormat};
pub use inventory::{AggregateReport, Product, Store, StoreError};
pub use session::Session;
