//! Tests for price table loading and lookups.

use rstest::rstest;
use rust_decimal_macros::dec;

use super::error::PricingError;
use super::table::PriceTable;
use super::types::GraftProduct;

const SHIPPED_TABLE: &str = include_str!("../../../../config/price_table.toml");

const SMALL_TABLE: &str = r#"
active_quarter = "2025-Q3"

[[quarters]]
label = "2025-Q2"

[[quarters.products]]
manufacturer = "Acme"
product_name = "DermaShield"
billing_code = "Q4100-Q2"
unit_price = "100.00"

[[quarters]]
label = "2025-Q3"

[[quarters.products]]
manufacturer = "Acme"
product_name = "DermaShield"
billing_code = "Q4100-Q3"
unit_price = "110.25"

[[quarters.products]]
manufacturer = "Acme"
product_name = "Retired Wrap"
billing_code = "Q4101"
unit_price = "80"
active = false

[[quarters.products]]
manufacturer = "Birch"
product_name = "CellGuard"
billing_code = "Q4200"
unit_price = "1190.44"
"#;

fn small_table() -> PriceTable {
    PriceTable::from_toml_str(SMALL_TABLE).unwrap()
}

#[test]
fn test_parse_document() {
    let table = small_table();
    assert_eq!(table.active_quarter, "2025-Q3");
    assert_eq!(table.quarters.len(), 2);
    assert_eq!(table.quarters[1].products[0].unit_price, dec!(110.25));
    assert!(table.quarters[1].products[0].active);
    assert!(!table.quarters[1].products[1].active);
}

#[test]
fn test_active_products_skip_archived_and_discontinued() {
    let table = small_table();
    let names: Vec<&str> = table
        .active_products()
        .iter()
        .map(|p| p.product_name.as_str())
        .collect();
    assert_eq!(names, vec!["DermaShield", "CellGuard"]);
}

#[test]
fn test_archived_quarters() {
    let table = small_table();
    let archived: Vec<&str> = table
        .archived_quarters()
        .map(|q| q.label.as_str())
        .collect();
    assert_eq!(archived, vec!["2025-Q2"]);
    assert_eq!(
        table.quarter("2025-Q2").unwrap().products[0].unit_price,
        dec!(100.00)
    );
}

#[test]
fn test_find_by_key() {
    let table = small_table();
    let product = table.find("Acme", "DermaShield", "Q4100-Q3").unwrap();
    assert_eq!(product.unit_price, dec!(110.25));

    assert!(table.find("Acme", "DermaShield", "Q4100-Q2").is_none());
    assert!(table.find("Acme", "Retired Wrap", "Q4101").is_none());
}

#[test]
fn test_find_by_billing_code_accepts_base_code() {
    let table = small_table();
    assert_eq!(
        table.find_by_billing_code("Q4100").unwrap().billing_code,
        "Q4100-Q3"
    );
    assert_eq!(
        table.find_by_billing_code("Q4100-Q3").unwrap().product_name,
        "DermaShield"
    );
    assert!(table.find_by_billing_code("Q4101").is_none());
    assert!(table.find_by_billing_code("Q9999").is_none());
}

#[test]
fn test_manufacturers_and_products_for() {
    let table = small_table();
    assert_eq!(table.manufacturers(), vec!["Acme", "Birch"]);
    assert_eq!(table.products_for("Acme").len(), 1);
    assert!(table.products_for("Nobody").is_empty());
}

#[test]
fn test_unknown_active_quarter_has_no_products() {
    let mut table = small_table();
    table.active_quarter = "2030-Q1".to_string();
    assert!(table.active_products().is_empty());
    assert!(table.manufacturers().is_empty());
}

#[rstest]
#[case("Q4100-Q3", "Q4100")]
#[case("Q4100", "Q4100")]
#[case("A-2000", "A-2000")]
#[case("Q4100-Q5", "Q4100-Q5")]
fn test_base_billing_code(#[case] billing_code: &str, #[case] expected: &str) {
    let product = GraftProduct::new("Acme", "DermaShield", billing_code, dec!(1));
    assert_eq!(product.base_billing_code(), expected);
}

#[test]
fn test_into_validated_collects_all_errors() {
    let document = r#"
active_quarter = "2025-Q3"

[[quarters]]
label = "2025-Q3"

[[quarters.products]]
manufacturer = "Acme"
product_name = "DermaShield"
billing_code = "Q4100"
unit_price = "0"

[[quarters.products]]
manufacturer = "Acme"
product_name = "DermaShield"
billing_code = "Q4100"
unit_price = "0"
"#;
    let table = PriceTable::from_toml_str(document).unwrap();
    match table.into_validated() {
        Err(PricingError::Invalid(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected invalid table, got {other:?}"),
    }
}

#[test]
fn test_shared_base_code_fails_load_time_validation() {
    let document = r#"
active_quarter = "2025-Q3"

[[quarters]]
label = "2025-Q3"

[[quarters.products]]
manufacturer = "Acme"
product_name = "DermaShield"
billing_code = "Q4100-Q3"
unit_price = "110.25"

[[quarters.products]]
manufacturer = "Birch"
product_name = "CellGuard"
billing_code = "Q4100"
unit_price = "98.00"
"#;
    let table = PriceTable::from_toml_str(document).unwrap();
    match table.into_validated() {
        Err(PricingError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("collides with Acme DermaShield"));
        }
        other => panic!("expected invalid table, got {other:?}"),
    }
}

#[test]
fn test_malformed_document_is_load_error() {
    let result = PriceTable::from_toml_str("active_quarter = [");
    assert!(matches!(result, Err(PricingError::Load(_))));
}

#[test]
fn test_shipped_table_is_valid() {
    let table = PriceTable::from_toml_str(SHIPPED_TABLE)
        .unwrap()
        .into_validated()
        .unwrap();
    assert_eq!(
        table.find_by_billing_code("Q4186").unwrap().unit_price,
        dec!(1190.44)
    );
}
