//! Grocery Deals prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    EXAMPLE_LIST,
    assignment::{AssignedItem, Assignment, StoreBucket, assign},
    catalog::{Catalog, CatalogBuilder, CatalogError},
    list::{GroceryLineItem, normalize_name, parse_list},
    report::{AssignmentReport, ReportError},
    stores::{Store, StoreSelection},
};
