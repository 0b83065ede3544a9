//! Stores

use std::fmt;

use serde::Deserialize;
use smallvec::SmallVec;

/// A grocery store from the fixed set of known stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, clap::ValueEnum)]
pub enum Store {
    /// Giant Eagle
    #[serde(rename = "Giant Eagle")]
    GiantEagle,

    /// Kuhn's
    #[serde(rename = "Kuhn's")]
    #[value(name = "kuhns")]
    Kuhns,

    /// Aldi
    #[serde(rename = "Aldi")]
    Aldi,

    /// Shop 'n Save
    #[serde(rename = "Shop 'n Save")]
    #[value(name = "shop-n-save")]
    ShopNSave,
}

impl Store {
    /// Every known store, in display order.
    pub const ALL: [Store; 4] = [Store::GiantEagle, Store::Kuhns, Store::Aldi, Store::ShopNSave];

    /// Human readable store name.
    pub fn name(self) -> &'static str {
        match self {
            Store::GiantEagle => "Giant Eagle",
            Store::Kuhns => "Kuhn's",
            Store::Aldi => "Aldi",
            Store::ShopNSave => "Shop 'n Save",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered set of stores the shopper is willing to visit.
///
/// Duplicates are dropped, keeping the first occurrence. The order is the
/// display order of the results and decides ties between equally cheap stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSelection {
    stores: SmallVec<[Store; 4]>,
}

impl StoreSelection {
    /// Create a selection from stores in the order given.
    pub fn new(stores: impl IntoIterator<Item = Store>) -> Self {
        stores.into_iter().collect()
    }

    /// Selection containing every known store.
    pub fn all() -> Self {
        Self::new(Store::ALL)
    }

    /// Whether the store is part of the selection.
    pub fn contains(&self, store: Store) -> bool {
        self.stores.contains(&store)
    }

    /// Iterate over the selected stores in selection order.
    pub fn iter(&self) -> impl Iterator<Item = Store> + '_ {
        self.stores.iter().copied()
    }

    /// Number of selected stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Whether no store is selected.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl FromIterator<Store> for StoreSelection {
    fn from_iter<I: IntoIterator<Item = Store>>(iter: I) -> Self {
        let mut stores = SmallVec::new();

        for store in iter {
            if !stores.contains(&store) {
                stores.push(store);
            }
        }

        StoreSelection { stores }
    }
}
