//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::inventory::Product;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output format for listings and the aggregate view
    #[serde(default)]
    pub format: OutputFormat,

    /// Price above which a product counts as expensive in the aggregate view
    #[serde(default = "default_price_threshold")]
    pub price_threshold: f64,

    /// Products loaded into the store at startup
    #[serde(default = "default_seed")]
    pub seed: Vec<Product>,
}

fn default_price_threshold() -> f64 {
    50.0
}

fn default_seed() -> Vec<Product> {
    vec![
        Product::new("P001", "Laptop", 899.99),
        Product::new("P002", "Mouse", 25.50),
        Product::new("P003", "Keyboard", 45.00),
        Product::new("P004", "Monitor", 199.99),
        Product::new("P005", "Webcam", 59.90),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            price_threshold: default_price_threshold(),
            seed: default_seed(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("invctl.toml");
        if local_config.exists() {
            debug!("Found invctl.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("invctl").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(format) = std::env::var("INVCTL_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        if let Ok(threshold) = std::env::var("INVCTL_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.price_threshold = t;
            }
        }

        self
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
