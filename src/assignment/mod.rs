//! Store Assignment
//!
//! Greedy per-item assignment: every line item goes to the selected store that
//! sells it for the lowest unit price. Items the catalog does not know, or that
//! only non-selected stores sell, are collected as unknown.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    list::GroceryLineItem,
    stores::{Store, StoreSelection},
};

mod bucket;

pub use bucket::{AssignedItem, StoreBucket};

/// Outcome of assigning a grocery list to stores.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    buckets: SmallVec<[StoreBucket; 4]>,
    unknown: Vec<GroceryLineItem>,
    grand_total: Money<'static, Currency>,
    used_stores: usize,
}

impl Assignment {
    /// One bucket per selected store, in selection order, including empty ones.
    pub fn buckets(&self) -> &[StoreBucket] {
        &self.buckets
    }

    /// Bucket for a store, if the store was selected.
    pub fn bucket(&self, store: Store) -> Option<&StoreBucket> {
        self.buckets.iter().find(|bucket| bucket.store() == store)
    }

    /// Buckets that received at least one item.
    pub fn used_buckets(&self) -> impl Iterator<Item = &StoreBucket> {
        self.buckets.iter().filter(|bucket| !bucket.is_empty())
    }

    /// Line items that could not be priced at any selected store.
    pub fn unknown(&self) -> &[GroceryLineItem] {
        &self.unknown
    }

    /// Sum of the totals of the used stores.
    pub fn grand_total(&self) -> Money<'static, Currency> {
        self.grand_total
    }

    /// Number of stores that received at least one item.
    pub fn used_stores(&self) -> usize {
        self.used_stores
    }

    /// Whether every line item was matched to a store.
    pub fn is_fully_matched(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Running state of the fold over the line items.
struct Tally {
    buckets: SmallVec<[StoreBucket; 4]>,
    unknown: Vec<GroceryLineItem>,
}

impl Tally {
    fn new(selection: &StoreSelection, currency: &'static Currency) -> Self {
        Tally {
            buckets: selection
                .iter()
                .map(|store| StoreBucket::new(store, currency))
                .collect(),
            unknown: Vec::new(),
        }
    }

    fn record(mut self, item: &GroceryLineItem, selection: &StoreSelection, catalog: &Catalog) -> Self {
        let Some((store, unit_price)) = cheapest_store(catalog, item.name(), selection) else {
            debug!(item = item.name(), "no selected store prices item");
            self.unknown.push(item.clone());

            return self;
        };

        let bucket = self.buckets.iter_mut().find(|bucket| bucket.store() == store);

        if let Some(bucket) = bucket {
            let sale_tag = catalog.sale_tag(item.name(), store).map(str::to_string);

            trace!(
                item = item.name(),
                %store,
                %unit_price,
                quantity = item.quantity().get(),
                "assigned item"
            );

            bucket.push(AssignedItem::new(
                item.name(),
                item.quantity(),
                unit_price,
                sale_tag,
            ));
        } else {
            self.unknown.push(item.clone());
        }

        self
    }

    fn finish(self, currency: &'static Currency) -> Assignment {
        let (used_stores, grand_total_minor) = self
            .buckets
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .fold((0, 0_i64), |(count, total), bucket| {
                (count + 1, total.saturating_add(bucket.total().to_minor_units()))
            });

        Assignment {
            buckets: self.buckets,
            unknown: self.unknown,
            grand_total: Money::from_minor(grand_total_minor, currency),
            used_stores,
        }
    }
}

/// Cheapest selected store for a product. Ties go to the store selected first.
fn cheapest_store(
    catalog: &Catalog,
    product: &str,
    selection: &StoreSelection,
) -> Option<(Store, Money<'static, Currency>)> {
    let prices = catalog.prices(product)?;

    selection
        .iter()
        .filter_map(|store| prices.get(&store).map(|price| (store, *price)))
        .min_by_key(|(_, price)| price.to_minor_units())
}

/// Assign each line item to the cheapest selected store.
///
/// Callers are expected to pass a non-empty selection and item list; empty
/// inputs produce an empty assignment.
#[tracing::instrument(
    name = "assignment.assign",
    skip_all,
    fields(items = items.len(), stores = selection.len())
)]
pub fn assign(items: &[GroceryLineItem], selection: &StoreSelection, catalog: &Catalog) -> Assignment {
    let currency = catalog.currency();

    let assignment = items
        .iter()
        .fold(Tally::new(selection, currency), |tally, item| {
            tally.record(item, selection, catalog)
        })
        .finish(currency);

    debug!(
        used_stores = assignment.used_stores(),
        unknown = assignment.unknown().len(),
        grand_total = %assignment.grand_total(),
        "assigned grocery list"
    );

    assignment
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::catalog::CatalogError;

    use super::*;

    fn item(name: &str, quantity: u64) -> GroceryLineItem {
        GroceryLineItem::new(name, name, NonZeroU64::new(quantity).unwrap_or(NonZeroU64::MIN))
    }

    fn tied_catalog() -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder(USD);

        builder
            .price("bread", Store::Aldi, Money::from_minor(199, USD))?
            .price("bread", Store::Kuhns, Money::from_minor(199, USD))?
            .price("bread", Store::GiantEagle, Money::from_minor(249, USD))?;

        builder.build()
    }

    #[test]
    fn ties_go_to_the_first_selected_store() -> TestResult {
        let catalog = tied_catalog()?;
        let items = [item("bread", 1)];

        let kuhns_first = assign(
            &items,
            &StoreSelection::new([Store::GiantEagle, Store::Kuhns, Store::Aldi]),
            &catalog,
        );
        let aldi_first = assign(
            &items,
            &StoreSelection::new([Store::Aldi, Store::Kuhns]),
            &catalog,
        );

        assert_eq!(kuhns_first.bucket(Store::Kuhns).map(StoreBucket::len), Some(1));
        assert_eq!(aldi_first.bucket(Store::Aldi).map(StoreBucket::len), Some(1));

        Ok(())
    }

    #[test]
    fn empty_buckets_are_kept() -> TestResult {
        let catalog = tied_catalog()?;
        let selection = StoreSelection::new([Store::ShopNSave, Store::Aldi]);

        let assignment = assign(&[item("bread", 2)], &selection, &catalog);

        assert_eq!(assignment.buckets().len(), 2);
        assert!(assignment.bucket(Store::ShopNSave).is_some_and(StoreBucket::is_empty));
        assert_eq!(assignment.used_stores(), 1);
        assert_eq!(assignment.grand_total(), Money::from_minor(398, USD));
        assert_eq!(assignment.used_buckets().count(), 1);

        Ok(())
    }

    #[test]
    fn empty_inputs_give_an_empty_assignment() -> TestResult {
        let catalog = tied_catalog()?;

        let assignment = assign(&[], &StoreSelection::default(), &catalog);

        assert!(assignment.buckets().is_empty());
        assert!(assignment.unknown().is_empty());
        assert_eq!(assignment.used_stores(), 0);
        assert_eq!(assignment.grand_total(), Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn items_without_selected_prices_are_unknown() -> TestResult {
        let catalog = tied_catalog()?;
        let items = [item("bread", 1)];

        let assignment = assign(&items, &StoreSelection::new([Store::ShopNSave]), &catalog);

        assert_eq!(assignment.unknown(), &items);
        assert!(!assignment.is_fully_matched());
        assert_eq!(assignment.used_stores(), 0);

        Ok(())
    }
}
