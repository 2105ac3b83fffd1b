//! In-memory product store with linear-scan lookups.
//!
//! Insertion order is preserved and drives display order. At this scale a
//! linear scan per lookup is adequate; no index is kept.

use crate::inventory::models::{AggregateReport, Product};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by store mutations.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// A product with this code already exists (case-insensitive).
    #[error("a product with code '{0}' already exists")]
    DuplicateCode(String),

    /// Prices must be non-negative.
    #[error("price cannot be negative (got {0})")]
    InvalidPrice(f64),

    /// No product matches this code.
    #[error("no product found with code '{0}'")]
    NotFound(String),
}

/// Ordered in-memory collection of products.
///
/// Invariant: no two products share a code under case-insensitive comparison.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records.
    ///
    /// Seed entries that would break code uniqueness or carry a negative
    /// price are skipped with a warning rather than aborting startup.
    pub fn with_seed(seed: &[Product]) -> Self {
        let mut store = Self::new();
        for product in seed {
            if let Err(err) = store.insert(&product.code, &product.name, product.price) {
                warn!("skipping seed product '{}': {}", product.code, err);
            }
        }
        debug!("seeded store with {} products", store.len());
        store
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over all products in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Finds the first product whose code matches, ignoring case.
    ///
    /// Code uniqueness means at most one product can match.
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code_matches(code))
    }

    /// Finds every product whose name matches, ignoring case.
    ///
    /// Names are not unique, so zero, one, or many products may match.
    pub fn find_all_by_name(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.name_matches(name)).collect()
    }

    /// Appends a new product after checking code uniqueness and price.
    pub fn insert(&mut self, code: &str, name: &str, price: f64) -> Result<(), StoreError> {
        if self.find_by_code(code).is_some() {
            return Err(StoreError::DuplicateCode(code.to_string()));
        }
        if price < 0.0 {
            return Err(StoreError::InvalidPrice(price));
        }
        debug!("inserting product '{}' at {:.2}", code, price);
        self.products.push(Product::new(code, name, price));
        Ok(())
    }

    /// Removes every product matching `code`, ignoring case.
    ///
    /// The uniqueness invariant should make at most one match possible, but
    /// removal sweeps all matches anyway. Returns true if at least one
    /// product was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| !p.code_matches(code));
        let removed = self.products.len() < before;
        if removed {
            debug!("removed {} product(s) with code '{}'", before - self.products.len(), code);
        }
        removed
    }

    /// Updates the price of the product matching `code` in place.
    pub fn update_price(&mut self, code: &str, new_price: f64) -> Result<(), StoreError> {
        if new_price < 0.0 {
            return Err(StoreError::InvalidPrice(new_price));
        }
        let product = self
            .products
            .iter_mut()
            .find(|p| p.code_matches(code))
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;
        debug!("updating price of '{}' from {:.2} to {:.2}", product.code, product.price, new_price);
        product.price = new_price;
        Ok(())
    }

    /// Computes the total value, the products priced strictly above
    /// `threshold`, and the most expensive product.
    ///
    /// Returns `None` on an empty store. The maximum scan uses strict `>`,
    /// so exact price ties resolve to the first-inserted product.
    pub fn aggregate(&self, threshold: f64) -> Option<AggregateReport> {
        let first = self.products.first()?;

        let mut total = 0.0;
        let mut most_expensive = first;
        let mut over_threshold = Vec::new();

        for product in &self.products {
            total += product.price;
            if product.price > most_expensive.price {
                most_expensive = product;
            }
            if product.price > threshold {
                over_threshold.push(product.clone());
            }
        }

        Some(AggregateReport {
            total,
            over_threshold,
            most_expensive: most_expensive.clone(),
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_products() -> Vec<Product> {
        vec![
            Product::new("P001", "Laptop", 899.99),
            Product::new("P002", "Mouse", 25.50),
            Product::new("P003", "Keyboard", 45.00),
            Product::new("P004", "Monitor", 199.99),
            Product::new("P005", "Webcam", 59.90),
        ]
    }

    fn seeded_store() -> Store {
        Store::with_seed(&seed_products())
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.list().count(), 0);
    }

    #[test]
    fn test_with_seed_loads_all() {
        let store = seeded_store();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_with_seed_skips_duplicates_and_negatives() {
        let seed = vec![
            Product::new("P001", "Laptop", 899.99),
            Product::new("p001", "Laptop copy", 10.0),
            Product::new("P002", "Broken", -1.0),
        ];
        let store = Store::with_seed(&seed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_code("P001").unwrap().name, "Laptop");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = seeded_store();
        let codes: Vec<&str> = store.list().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["P001", "P002", "P003", "P004", "P005"]);
    }

    #[test]
    fn test_find_by_code_retrieves_inserted() {
        let store = seeded_store();
        for product in seed_products() {
            let found = store.find_by_code(&product.code).unwrap();
            assert_eq!(found, &product);
        }
    }

    #[test]
    fn test_find_by_code_case_insensitive() {
        let store = seeded_store();
        assert_eq!(store.find_by_code("p001").unwrap().name, "Laptop");
        assert_eq!(store.find_by_code("P001").unwrap().name, "Laptop");
        assert!(store.find_by_code("P999").is_none());
    }

    #[test]
    fn test_find_all_by_name() {
        let mut store = seeded_store();
        store.insert("P006", "laptop", 499.99).unwrap();

        let matches = store.find_all_by_name("LAPTOP");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].code, "P001");
        assert_eq!(matches[1].code, "P006");

        assert!(store.find_all_by_name("Printer").is_empty());
    }

    #[test]
    fn test_insert_duplicate_code_rejected() {
        let mut store = seeded_store();
        let err = store.insert("P001", "Another laptop", 10.0).unwrap_err();
        assert_eq!(err, StoreError::DuplicateCode("P001".to_string()));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_insert_duplicate_code_case_variant_rejected() {
        let mut store = seeded_store();
        let err = store.insert("p001", "Lowercase laptop", 10.0).unwrap_err();
        assert_eq!(err, StoreError::DuplicateCode("p001".to_string()));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_insert_negative_price_rejected() {
        let mut store = seeded_store();
        let err = store.insert("P006", "Headset", -0.01).unwrap_err();
        assert_eq!(err, StoreError::InvalidPrice(-0.01));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_insert_zero_price_allowed() {
        let mut store = Store::new();
        assert!(store.insert("FREE1", "Sticker", 0.0).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_then_find_yields_nothing() {
        let mut store = seeded_store();
        assert!(store.remove("P003"));
        assert!(store.find_by_code("P003").is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_remove_case_insensitive() {
        let mut store = seeded_store();
        assert!(store.remove("p005"));
        assert!(store.find_by_code("P005").is_none());
    }

    #[test]
    fn test_remove_missing_reports_false() {
        let mut store = seeded_store();
        assert!(!store.remove("P999"));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_update_price() {
        let mut store = seeded_store();
        store.update_price("p002", 30.0).unwrap();
        assert_eq!(store.find_by_code("P002").unwrap().price, 30.0);
    }

    #[test]
    fn test_update_price_negative_leaves_price_unchanged() {
        let mut store = seeded_store();
        let err = store.update_price("P002", -5.0).unwrap_err();
        assert_eq!(err, StoreError::InvalidPrice(-5.0));
        assert_eq!(store.find_by_code("P002").unwrap().price, 25.50);
    }

    #[test]
    fn test_update_price_missing_code() {
        let mut store = seeded_store();
        let err = store.update_price("P999", 10.0).unwrap_err();
        assert_eq!(err, StoreError::NotFound("P999".to_string()));
    }

    #[test]
    fn test_aggregate_empty_store() {
        let store = Store::new();
        assert!(store.aggregate(50.0).is_none());
    }

    #[test]
    fn test_aggregate_seed_scenario() {
        let store = seeded_store();
        let report = store.aggregate(50.0).unwrap();

        assert!((report.total - 1230.38).abs() < 1e-9);

        let over: Vec<&str> = report.over_threshold.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(over, vec!["P001", "P004", "P005"]);

        assert_eq!(report.most_expensive.code, "P001");
        assert_eq!(report.threshold, 50.0);
    }

    #[test]
    fn test_aggregate_total_matches_sum() {
        let store = seeded_store();
        let report = store.aggregate(50.0).unwrap();
        let sum: f64 = store.list().map(|p| p.price).sum();
        assert_eq!(report.total, sum);
    }

    #[test]
    fn test_aggregate_most_expensive_tie_goes_to_first_inserted() {
        let mut store = Store::new();
        store.insert("A1", "First", 100.0).unwrap();
        store.insert("A2", "Second", 100.0).unwrap();
        store.insert("A3", "Third", 50.0).unwrap();

        let report = store.aggregate(50.0).unwrap();
        assert_eq!(report.most_expensive.code, "A1");
    }

    #[test]
    fn test_aggregate_threshold_is_strict() {
        let mut store = Store::new();
        store.insert("A1", "At threshold", 50.0).unwrap();
        store.insert("A2", "Above threshold", 50.01).unwrap();

        let report = store.aggregate(50.0).unwrap();
        let over: Vec<&str> = report.over_threshold.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(over, vec!["A2"]);
    }

    #[test]
    fn test_aggregate_single_product() {
        let mut store = Store::new();
        store.insert("P001", "Laptop", 899.99).unwrap();

        let report = store.aggregate(50.0).unwrap();
        assert_eq!(report.total, 899.99);
        assert_eq!(report.most_expensive.code, "P001");
        assert_eq!(report.over_threshold.len(), 1);
    }
}
