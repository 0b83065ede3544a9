//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{catalog::CatalogError, stores::Store};

/// Wrapper for catalog products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of product name -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Shelf price per store (e.g., "2.69 USD")
    pub prices: FxHashMap<Store, String>,

    /// Sale annotation per store
    #[serde(default)]
    pub sales: FxHashMap<Store, String>,
}

/// Parse price string (e.g., "2.69 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(CatalogError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
