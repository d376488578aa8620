//! Pricing data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchasable tissue-graft product at a specific price point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraftProduct {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Product name.
    pub product_name: String,
    /// External billing code, optionally suffixed with a pricing quarter (`Q4186-Q3`).
    pub billing_code: String,
    /// Price per square centimeter of wound area.
    pub unit_price: Decimal,
    /// Whether the product is still offered. Discontinued products stay in
    /// history but are excluded from the active list.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl GraftProduct {
    /// Creates an active product.
    pub fn new(
        manufacturer: impl Into<String>,
        product_name: impl Into<String>,
        billing_code: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            product_name: product_name.into(),
            billing_code: billing_code.into(),
            unit_price,
            active: true,
        }
    }

    /// Returns the billing code without a trailing pricing-quarter suffix.
    ///
    /// `Q4186-Q3` becomes `Q4186`; codes without a `-Q1`..`-Q4` suffix are
    /// returned unchanged.
    pub fn base_billing_code(&self) -> &str {
        match self.billing_code.rsplit_once('-') {
            Some((base, suffix)) if matches!(suffix, "Q1" | "Q2" | "Q3" | "Q4") => base,
            _ => &self.billing_code,
        }
    }

    /// Returns true if `manufacturer`, `product_name` and `billing_code` all match.
    pub fn matches_key(&self, manufacturer: &str, product_name: &str, billing_code: &str) -> bool {
        self.manufacturer == manufacturer
            && self.product_name == product_name
            && self.billing_code == billing_code
    }
}

/// The product list of one pricing quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuarter {
    /// Quarter label, e.g. `2025-Q3`.
    pub label: String,
    /// Products in display order.
    #[serde(default)]
    pub products: Vec<GraftProduct>,
}
