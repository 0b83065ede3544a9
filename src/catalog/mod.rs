//! Catalog
//!
//! Static price table mapping product names to per-store unit prices, with
//! optional sale annotations. A catalog is built once and only read afterwards.

use std::{fs, path::Path};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{list::normalize_name, stores::Store};

pub mod fixture;

use fixture::{CatalogFixture, parse_price};

/// Price table shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format or negative price
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// A sale tag was given for a store that has no price for the product
    #[error("Sale tag for {product} at {store}, but {store} has no price for it")]
    SaleTagWithoutPrice {
        /// Product name
        product: String,
        /// Store carrying the tag
        store: Store,
    },

    /// The fixture defines no prices, so the currency is unknown
    #[error("Catalog has no prices; currency unknown")]
    Empty,

    /// Two product keys normalise to the same name
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),
}

/// Product price table
#[derive(Debug, Clone)]
pub struct Catalog {
    prices: FxHashMap<String, FxHashMap<Store, Money<'static, Currency>>>,
    sale_tags: FxHashMap<String, FxHashMap<Store, String>>,
    currency: &'static Currency,
}

impl Catalog {
    /// Start building a catalog priced in the given currency.
    pub fn builder(currency: &'static Currency) -> CatalogBuilder {
        CatalogBuilder {
            prices: FxHashMap::default(),
            sale_tags: FxHashMap::default(),
            currency,
        }
    }

    /// Load the price table embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded fixture is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is malformed,
    /// prices use different currencies, a sale tag has no matching price,
    /// or no prices are defined.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let mut parsed = Vec::new();
        let mut names = FxHashSet::default();

        for (product, product_fixture) in &fixture.products {
            let name = normalize_name(product);

            if !names.insert(name.clone()) {
                return Err(CatalogError::DuplicateProduct(name));
            }

            for (store, price) in &product_fixture.prices {
                let (minor_units, currency) = parse_price(price)?;

                parsed.push((product.as_str(), *store, Money::from_minor(minor_units, currency)));
            }
        }

        let currency = parsed
            .first()
            .map(|(_, _, price)| price.currency())
            .ok_or(CatalogError::Empty)?;

        let mut builder = Catalog::builder(currency);

        for (product, store, price) in parsed {
            builder.price(product, store, price)?;
        }

        for (product, product_fixture) in &fixture.products {
            for (store, tag) in &product_fixture.sales {
                builder.sale_tag(product, *store, tag.clone());
            }
        }

        let catalog = builder.build()?;

        debug!(
            products = catalog.len(),
            currency = catalog.currency.iso_alpha_code,
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Per-store prices for a product, looked up by normalised name.
    pub fn prices(&self, product: &str) -> Option<&FxHashMap<Store, Money<'static, Currency>>> {
        self.prices.get(product)
    }

    /// Price of a product at a store, if the store sells it.
    pub fn price(&self, product: &str, store: Store) -> Option<Money<'static, Currency>> {
        self.prices(product)
            .and_then(|prices| prices.get(&store))
            .copied()
    }

    /// Sale annotation for a product at a store, if any.
    pub fn sale_tag(&self, product: &str, store: Store) -> Option<&str> {
        self.sale_tags
            .get(product)
            .and_then(|tags| tags.get(&store))
            .map(String::as_str)
    }

    /// Iterate over the normalised product names.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    /// Currency of every price in the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Incrementally assembles a [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    prices: FxHashMap<String, FxHashMap<Store, Money<'static, Currency>>>,
    sale_tags: FxHashMap<String, FxHashMap<Store, String>>,
    currency: &'static Currency,
}

impl CatalogBuilder {
    /// Set the price of a product at a store. Product names are normalised.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::CurrencyMismatch`]: the price is not in the catalog currency.
    /// - [`CatalogError::InvalidPrice`]: the price is negative.
    pub fn price(
        &mut self,
        product: &str,
        store: Store,
        price: Money<'static, Currency>,
    ) -> Result<&mut Self, CatalogError> {
        if price.currency() != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                self.currency.iso_alpha_code,
                price.currency().iso_alpha_code,
            ));
        }

        if price.to_minor_units() < 0 {
            return Err(CatalogError::InvalidPrice(format!("{product} at {store}: {price}")));
        }

        self.prices
            .entry(normalize_name(product))
            .or_default()
            .insert(store, price);

        Ok(self)
    }

    /// Annotate the price of a product at a store with a sale tag. Blank tags
    /// are ignored.
    pub fn sale_tag(&mut self, product: &str, store: Store, tag: impl Into<String>) -> &mut Self {
        let tag = tag.into();

        if tag.trim().is_empty() {
            return self;
        }

        self.sale_tags
            .entry(normalize_name(product))
            .or_default()
            .insert(store, tag);

        self
    }

    /// Finish the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SaleTagWithoutPrice`] if a sale tag is attached
    /// to a store that has no price for the product.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        for (product, tags) in &self.sale_tags {
            for store in tags.keys() {
                let priced = self
                    .prices
                    .get(product)
                    .is_some_and(|prices| prices.contains_key(store));

                if !priced {
                    return Err(CatalogError::SaleTagWithoutPrice {
                        product: product.clone(),
                        store: *store,
                    });
                }
            }
        }

        Ok(Catalog {
            prices: self.prices,
            sale_tags: self.sale_tags,
            currency: self.currency,
        })
    }
}
