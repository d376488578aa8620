//! Graft price table validator.
//!
//! Checks a price table file and prints every violation found, so a new
//! pricing quarter can be reviewed before it is deployed.
//!
//! Usage: cargo run --bin pricecheck [path]
//!
//! Without a path, the table configured for the server is checked.

use std::process::ExitCode;

use healwise_core::pricing::PriceTable;
use healwise_shared::AppConfig;
use healwise_shared::types::format_currency;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => AppConfig::load()?.pricing.table_path,
    };

    println!("Checking {path}...");
    let table = PriceTable::load(&path)?;

    let report = table.validate();
    if !report.is_valid {
        for error in &report.errors {
            println!("  error: {error}");
        }
        println!("{} error(s) found.", report.errors.len());
        return Ok(ExitCode::FAILURE);
    }

    println!("Active quarter: {}", table.active_quarter);
    for product in table.active_products() {
        println!(
            "  {} | {} | {} | {}",
            product.manufacturer,
            product.product_name,
            product.billing_code,
            format_currency(product.unit_price)
        );
    }
    let archived: Vec<&str> = table.archived_quarters().map(|q| q.label.as_str()).collect();
    if !archived.is_empty() {
        println!("Archived quarters: {}", archived.join(", "));
    }
    println!("Price table is valid.");

    Ok(ExitCode::SUCCESS)
}
