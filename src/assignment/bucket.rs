//! Store Buckets

use std::num::NonZeroU64;

use rusty_money::{Money, iso::Currency};

use crate::stores::Store;

/// A line item matched to the store that sells it cheapest.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedItem {
    name: String,
    quantity: NonZeroU64,
    unit_price: Money<'static, Currency>,
    line_total: Money<'static, Currency>,
    sale_tag: Option<String>,
}

impl AssignedItem {
    /// Create an assigned item; the line total is `unit_price * quantity`.
    pub fn new(
        name: impl Into<String>,
        quantity: NonZeroU64,
        unit_price: Money<'static, Currency>,
        sale_tag: Option<String>,
    ) -> Self {
        let line_total = Money::from_minor(
            unit_price
                .to_minor_units()
                .saturating_mul(i64::try_from(quantity.get()).unwrap_or(i64::MAX)),
            unit_price.currency(),
        );

        AssignedItem {
            name: name.into(),
            quantity,
            unit_price,
            line_total,
            sale_tag,
        }
    }

    /// Normalised product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units bought.
    pub fn quantity(&self) -> NonZeroU64 {
        self.quantity
    }

    /// Price of one unit at the chosen store.
    pub fn unit_price(&self) -> Money<'static, Currency> {
        self.unit_price
    }

    /// `unit_price * quantity`
    pub fn line_total(&self) -> Money<'static, Currency> {
        self.line_total
    }

    /// Sale annotation for the product at the chosen store.
    pub fn sale_tag(&self) -> Option<&str> {
        self.sale_tag.as_deref()
    }
}

/// Items assigned to one selected store and their running total.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreBucket {
    store: Store,
    items: Vec<AssignedItem>,
    total_minor: i64,
    currency: &'static Currency,
}

impl StoreBucket {
    /// Create an empty bucket for a store.
    pub fn new(store: Store, currency: &'static Currency) -> Self {
        StoreBucket {
            store,
            items: Vec::new(),
            total_minor: 0,
            currency,
        }
    }

    pub(crate) fn push(&mut self, item: AssignedItem) {
        self.total_minor = self
            .total_minor
            .saturating_add(item.line_total.to_minor_units());

        self.items.push(item);
    }

    /// The store this bucket belongs to.
    pub fn store(&self) -> Store {
        self.store
    }

    /// Assigned items, in list order.
    pub fn items(&self) -> &[AssignedItem] {
        &self.items
    }

    /// Sum of the line totals.
    pub fn total(&self) -> Money<'static, Currency> {
        Money::from_minor(self.total_minor, self.currency)
    }

    /// Number of assigned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item was assigned to this store.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
