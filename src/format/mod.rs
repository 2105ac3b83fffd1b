//! Output formatting for products and the aggregate report (table, JSON, CSV).

use crate::config::OutputFormat;
use crate::inventory::{AggregateReport, Product};

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product),
            OutputFormat::Table => self.table_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats a product listing.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                OutputFormat::Table => "No products in inventory.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats the aggregate report.
    pub fn format_report(&self, report: &AggregateReport) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_report(report),
            OutputFormat::Csv => self.csv_report(report),
        }
    }

    // JSON formatting

    fn json_single(&self, product: &Product) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Code:   {}", product.code));
        lines.push(format!("Name:   {}", product.name));
        lines.push(format!("Price:  {:.2}€", product.price));

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let code_width = 8;
        let price_width = 10;

        let mut lines = Vec::new();

        // Header
        lines.push(format!("{:<code_width$}  {:>price_width$}  {}", "Code", "Price", "Name"));
        lines.push(format!("{:-<code_width$}  {:-<price_width$}  {:-<30}", "", "", ""));

        // Rows
        for product in products {
            lines.push(format!(
                "{:<code_width$}  {:>price_width$.2}  {}",
                product.code, product.price, product.name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    fn table_report(&self, report: &AggregateReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Products priced over {:.2}€:", report.threshold));
        if report.over_threshold.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            for product in &report.over_threshold {
                lines.push(format!("  {}", product));
            }
        }

        lines.push(format!("Total inventory value: {:.2}€", report.total));
        lines.push(format!("Most expensive: {}", report.most_expensive));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "code,name,price".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{:.2}",
                Self::csv_escape(&product.code),
                Self::csv_escape(&product.name),
                product.price
            ));
        }

        lines.join("\n")
    }

    fn csv_report(&self, report: &AggregateReport) -> String {
        let mut lines = Vec::new();
        lines.push("section,code,name,price".to_string());

        for product in &report.over_threshold {
            lines.push(format!(
                "over_threshold,{},{},{:.2}",
                Self::csv_escape(&product.code),
                Self::csv_escape(&product.name),
                product.price
            ));
        }

        lines.push(format!(
            "most_expensive,{},{},{:.2}",
            Self::csv_escape(&report.most_expensive.code),
            Self::csv_escape(&report.most_expensive.name),
            report.most_expensive.price
        ));
        lines.push(format!("total,,,{:.2}", report.total));

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
