//! Price table validation.
//!
//! Unlike ledger-style validation that stops at the first problem, a price
//! table is checked in full so the whole list of configuration mistakes can
//! be fixed in one pass.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use super::table::PriceTable;
use super::types::{GraftProduct, PricingQuarter};

/// Outcome of validating a price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTableValidation {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// One human-readable message per violation.
    pub errors: Vec<String>,
}

impl PriceTableValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub(super) fn validate_table(table: &PriceTable) -> PriceTableValidation {
    let mut errors = Vec::new();

    if table.quarter(&table.active_quarter).is_none() {
        errors.push(format!(
            "Active quarter '{}' is not defined",
            table.active_quarter
        ));
    }

    let mut labels = HashSet::new();
    for quarter in &table.quarters {
        if !labels.insert(quarter.label.as_str()) {
            errors.push(format!("Duplicate quarter '{}'", quarter.label));
        }
        validate_quarter(quarter, &mut errors);
    }

    PriceTableValidation::from_errors(errors)
}

fn validate_quarter(quarter: &PricingQuarter, errors: &mut Vec<String>) {
    let mut keys = HashSet::new();
    let mut codes: HashMap<&str, &GraftProduct> = HashMap::new();

    for (index, product) in quarter.products.iter().enumerate() {
        let position = index + 1;

        for (field, value) in [
            ("manufacturer", &product.manufacturer),
            ("product_name", &product.product_name),
            ("billing_code", &product.billing_code),
        ] {
            if value.trim().is_empty() {
                errors.push(format!(
                    "{}: product #{position} has a blank {field}",
                    quarter.label
                ));
            }
        }

        let key = (
            product.manufacturer.as_str(),
            product.product_name.as_str(),
            product.billing_code.as_str(),
        );
        if keys.insert(key) {
            if product.active {
                check_billing_code(quarter, product, &mut codes, errors);
            }
        } else {
            errors.push(format!(
                "{}: duplicate product {} / {} / {}",
                quarter.label, product.manufacturer, product.product_name, product.billing_code
            ));
        }

        if product.unit_price <= Decimal::ZERO {
            errors.push(format!(
                "{}: {} {} ({}) has non-positive unit price {}",
                quarter.label,
                product.manufacturer,
                product.product_name,
                product.billing_code,
                product.unit_price
            ));
        }
    }
}

/// Offered products of a quarter must be told apart by billing code alone,
/// in full or without its quarter suffix.
fn check_billing_code<'a>(
    quarter: &PricingQuarter,
    product: &'a GraftProduct,
    codes: &mut HashMap<&'a str, &'a GraftProduct>,
    errors: &mut Vec<String>,
) {
    let base = product.base_billing_code();
    let mut lookups = vec![product.billing_code.as_str()];
    if base != product.billing_code {
        lookups.push(base);
    }

    if let Some(other) = lookups.iter().find_map(|code| codes.get(code).copied()) {
        errors.push(format!(
            "{}: billing code {} of {} {} collides with {} {} ({})",
            quarter.label,
            product.billing_code,
            product.manufacturer,
            product.product_name,
            other.manufacturer,
            other.product_name,
            other.billing_code
        ));
        return;
    }
    for code in lookups {
        codes.insert(code, product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::types::GraftProduct;
    use rust_decimal_macros::dec;

    fn quarter(label: &str, products: Vec<GraftProduct>) -> PricingQuarter {
        PricingQuarter {
            label: label.to_string(),
            products,
        }
    }

    #[test]
    fn test_valid_table() {
        let table = PriceTable::new(
            "2025-Q3",
            vec![quarter(
                "2025-Q3",
                vec![GraftProduct::new("Acme", "DermaShield", "Q4100", dec!(120.50))],
            )],
        );
        let report = table.validate();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_reports_every_violation() {
        let table = PriceTable::new(
            "2025-Q3",
            vec![quarter(
                "2025-Q3",
                vec![
                    GraftProduct::new("Acme", "DermaShield", "Q4100", dec!(120.50)),
                    GraftProduct::new("Acme", "DermaShield", "Q4100", dec!(120.50)),
                    GraftProduct::new("Acme", "NovaSkin", "Q4101", dec!(0)),
                    GraftProduct::new("Acme", "ThinWrap", "Q4102", dec!(-5)),
                ],
            )],
        );
        let report = table.validate();
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[0].contains("duplicate product"));
        assert!(report.errors[1].contains("non-positive unit price 0"));
        assert!(report.errors[2].contains("non-positive unit price -5"));
    }

    #[test]
    fn test_same_product_in_two_quarters_is_allowed() {
        let product = GraftProduct::new("Acme", "DermaShield", "Q4100", dec!(120.50));
        let table = PriceTable::new(
            "2025-Q3",
            vec![
                quarter("2025-Q2", vec![product.clone()]),
                quarter("2025-Q3", vec![product]),
            ],
        );
        assert!(table.validate().is_valid);
    }

    #[test]
    fn test_shared_base_billing_code_is_reported() {
        let table = PriceTable::new(
            "2025-Q3",
            vec![quarter(
                "2025-Q3",
                vec![
                    GraftProduct::new("Acme", "DermaShield", "Q4100-Q3", dec!(120.50)),
                    GraftProduct::new("Birch", "CellGuard", "Q4100", dec!(98.00)),
                    GraftProduct::new("Birch", "CellGuard Max", "Q4100-Q3", dec!(140.00)),
                ],
            )],
        );
        let report = table.validate();
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                "2025-Q3: billing code Q4100 of Birch CellGuard collides with Acme DermaShield (Q4100-Q3)"
                    .to_string(),
                "2025-Q3: billing code Q4100-Q3 of Birch CellGuard Max collides with Acme DermaShield (Q4100-Q3)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_discontinued_product_may_share_billing_code() {
        let mut retired = GraftProduct::new("Acme", "DermaShield", "Q4100-Q2", dec!(115.00));
        retired.active = false;
        let table = PriceTable::new(
            "2025-Q3",
            vec![quarter(
                "2025-Q3",
                vec![
                    retired,
                    GraftProduct::new("Acme", "DermaShield", "Q4100-Q3", dec!(120.50)),
                ],
            )],
        );
        assert!(table.validate().is_valid);
    }

    #[test]
    fn test_missing_active_quarter() {
        let table = PriceTable::new("2025-Q4", vec![quarter("2025-Q3", vec![])]);
        let report = table.validate();
        assert_eq!(
            report.errors,
            vec!["Active quarter '2025-Q4' is not defined".to_string()]
        );
    }

    #[test]
    fn test_duplicate_quarter_and_blank_fields() {
        let table = PriceTable::new(
            "2025-Q3",
            vec![
                quarter("2025-Q3", vec![]),
                quarter(
                    "2025-Q3",
                    vec![GraftProduct::new(" ", "DermaShield", "", dec!(10))],
                ),
            ],
        );
        let report = table.validate();
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                "Duplicate quarter '2025-Q3'".to_string(),
                "2025-Q3: product #1 has a blank manufacturer".to_string(),
                "2025-Q3: product #1 has a blank billing_code".to_string(),
            ]
        );
    }
}
