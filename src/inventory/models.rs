//! Data models for inventory products and the aggregate report.

use serde::{Deserialize, Serialize};

/// One product record: unique code, descriptive name, mutable price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, compared case-insensitively (e.g. "P001")
    pub code: String,
    /// Descriptive name
    pub name: String,
    /// Price in euros, never negative once stored
    pub price: f64,
}

impl Product {
    /// Creates a new product record.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self { code: code.into(), name: name.into(), price }
    }

    /// Returns true if this product's code equals `code`, ignoring case.
    pub fn code_matches(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }

    /// Returns true if this product's name equals `name`, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({:.2}€)", self.code, self.name, self.price)
    }
}

/// Summary computed over the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// Sum of all product prices
    pub total: f64,
    /// Products priced strictly above the threshold, in insertion order
    pub over_threshold: Vec<Product>,
    /// Highest-priced product; exact ties go to the first inserted
    pub most_expensive: Product,
    /// Threshold the report was computed with
    pub threshold: f64,
}
