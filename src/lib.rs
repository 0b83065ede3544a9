//! Grocery Deals
//!
//! Splits a grocery list across stores so that every item is bought where it
//! is cheapest, using a static price catalog.
//!
//! ```no_run
//! use grocery_deals::prelude::*;
//!
//! # fn main() -> Result<(), CatalogError> {
//! let catalog = Catalog::builtin()?;
//! let items = parse_list("milk x2\neggs x12\nice cream");
//! let assignment = assign(&items, &StoreSelection::all(), &catalog);
//!
//! assert_eq!(assignment.used_stores(), 1);
//! # Ok(())
//! # }
//! ```

pub mod assignment;
pub mod catalog;
pub mod list;
pub mod prelude;
pub mod report;
pub mod stores;

/// Sample grocery list used to demonstrate the optimiser.
pub const EXAMPLE_LIST: &str = include_str!("../fixtures/example_list.txt");
