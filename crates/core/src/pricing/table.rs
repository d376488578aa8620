//! The quarterly graft price table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::PricingError;
use super::types::{GraftProduct, PricingQuarter};
use super::validation::{self, PriceTableValidation};

/// All known pricing quarters plus the label of the one in effect.
///
/// Immutable once built. Replace the whole table to roll over to a new
/// quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Label of the quarter whose products participate in computation.
    pub active_quarter: String,
    /// Active and archival quarters, in document order.
    #[serde(default)]
    pub quarters: Vec<PricingQuarter>,
}

impl PriceTable {
    /// Creates a price table.
    pub fn new(active_quarter: impl Into<String>, quarters: Vec<PricingQuarter>) -> Self {
        Self {
            active_quarter: active_quarter.into(),
            quarters,
        }
    }

    /// Parses a TOML price table document.
    pub fn from_toml_str(document: &str) -> Result<Self, PricingError> {
        let table = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(table)
    }

    /// Reads and parses a TOML price table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading price table");

        let table: Self = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(table)
    }

    /// Validates the table and returns it only if no violation was found.
    pub fn into_validated(self) -> Result<Self, PricingError> {
        let report = self.validate();
        if report.is_valid {
            Ok(self)
        } else {
            for error in &report.errors {
                warn!(%error, "Price table violation");
            }
            Err(PricingError::Invalid(report.errors))
        }
    }

    /// Checks the whole table and reports every violation found.
    pub fn validate(&self) -> PriceTableValidation {
        validation::validate_table(self)
    }

    /// Returns the quarter with the given label.
    pub fn quarter(&self, label: &str) -> Option<&PricingQuarter> {
        self.quarters.iter().find(|q| q.label == label)
    }

    /// Returns the quarter currently in effect.
    pub fn current_quarter(&self) -> Option<&PricingQuarter> {
        self.quarter(&self.active_quarter)
    }

    /// Returns every quarter other than the active one.
    pub fn archived_quarters(&self) -> impl Iterator<Item = &PricingQuarter> {
        self.quarters
            .iter()
            .filter(|q| q.label != self.active_quarter)
    }

    /// Returns the active quarter's offered products, in document order.
    pub fn active_products(&self) -> Vec<&GraftProduct> {
        self.current_quarter()
            .map(|q| q.products.iter().filter(|p| p.active).collect())
            .unwrap_or_default()
    }

    /// Looks up an active product by its unique key.
    pub fn find(
        &self,
        manufacturer: &str,
        product_name: &str,
        billing_code: &str,
    ) -> Option<&GraftProduct> {
        self.active_products()
            .into_iter()
            .find(|p| p.matches_key(manufacturer, product_name, billing_code))
    }

    /// Looks up the active product with the given billing code.
    ///
    /// Matches either the full code or the code without its quarter suffix.
    /// A validated table has at most one such product.
    pub fn find_by_billing_code(&self, billing_code: &str) -> Option<&GraftProduct> {
        self.active_products()
            .into_iter()
            .find(|p| p.billing_code == billing_code || p.base_billing_code() == billing_code)
    }

    /// Returns the distinct manufacturers of the active products, first-seen order.
    pub fn manufacturers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.active_products() {
            if !seen.contains(&product.manufacturer.as_str()) {
                seen.push(&product.manufacturer);
            }
        }
        seen
    }

    /// Returns the active products of one manufacturer.
    pub fn products_for(&self, manufacturer: &str) -> Vec<&GraftProduct> {
        self.active_products()
            .into_iter()
            .filter(|p| p.manufacturer == manufacturer)
            .collect()
    }
}
