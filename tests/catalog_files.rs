//! Integration tests for loading price catalogs from YAML files.

use std::fs;

use rusty_money::{Money, iso::EUR};
use tempfile::tempdir;
use testresult::TestResult;

use grocery_deals::prelude::*;

const CATALOG_YAML: &str = r#"
products:
  Oat Milk:
    prices:
      "Aldi": 1.79 EUR
      "Kuhn's": 2.19 EUR
    sales:
      "Aldi": Weekly sale
  bread:
    prices:
      "Giant Eagle": 2.49 EUR
"#;

#[test]
fn loads_catalog_from_file() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("catalog.yml");
    fs::write(&path, CATALOG_YAML)?;

    let catalog = Catalog::from_path(&path)?;

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.currency(), EUR);
    assert_eq!(catalog.price("oat milk", Store::Aldi), Some(Money::from_minor(179, EUR)));
    assert_eq!(catalog.sale_tag("oat milk", Store::Aldi), Some("Weekly sale"));

    let mut products: Vec<&str> = catalog.products().collect();
    products.sort_unstable();

    assert_eq!(products, vec!["bread", "oat milk"]);

    Ok(())
}

#[test]
fn file_catalog_drives_assignment() -> TestResult {
    let catalog = Catalog::from_yaml(CATALOG_YAML)?;
    let selection = StoreSelection::new([Store::Kuhns, Store::Aldi]);

    let assignment = assign(&parse_list("OAT MILK x3\nbread"), &selection, &catalog);

    let aldi = assignment.bucket(Store::Aldi).ok_or("Expected Aldi bucket")?;

    assert_eq!(aldi.total(), Money::from_minor(537, EUR));
    assert_eq!(assignment.unknown().len(), 1);

    Ok(())
}

#[test]
fn missing_file_is_an_io_error() -> TestResult {
    let dir = tempdir()?;

    let result = Catalog::from_path(dir.path().join("missing.yml"));

    assert!(matches!(result, Err(CatalogError::Io(_))));

    Ok(())
}

#[test]
fn sale_tag_without_price_is_rejected() {
    let yaml = "products:\n  bread:\n    prices:\n      Aldi: 1.00 EUR\n    sales:\n      \"Kuhn's\": Card price\n";

    let result = Catalog::from_yaml(yaml);

    assert!(matches!(
        result,
        Err(CatalogError::SaleTagWithoutPrice { store: Store::Kuhns, .. })
    ));
}

#[test]
fn malformed_price_is_rejected() {
    let yaml = "products:\n  bread:\n    prices:\n      Aldi: cheap EUR\n";

    let result = Catalog::from_yaml(yaml);

    assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
}
