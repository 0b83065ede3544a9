//! Grocery Lists
//!
//! Free-text lists hold one item per line with an optional trailing quantity
//! marker, e.g. `milk x2`. Parsing is lenient: lines that yield no item name
//! are dropped rather than reported.

use std::num::NonZeroU64;

use tracing::trace;

/// One entry parsed from a grocery list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroceryLineItem {
    raw_text: String,
    name: String,
    quantity: NonZeroU64,
}

impl GroceryLineItem {
    /// Create a line item. The name is normalised.
    pub fn new(raw_text: impl Into<String>, name: &str, quantity: NonZeroU64) -> Self {
        GroceryLineItem {
            raw_text: raw_text.into(),
            name: normalize_name(name),
            quantity,
        }
    }

    /// Parse a single line. Returns `None` when the line has no item name.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, digits) = split_quantity(line);

        let name = normalize_name(name);

        if name.is_empty() {
            return None;
        }

        // `digits` is all ASCII digits, so parsing only fails on overflow.
        let quantity = digits.map_or(NonZeroU64::MIN, |digits| {
            let parsed = digits.parse::<u64>().unwrap_or(u64::MAX);

            NonZeroU64::new(parsed).unwrap_or(NonZeroU64::MIN)
        });

        Some(GroceryLineItem {
            raw_text: line.to_string(),
            name,
            quantity,
        })
    }

    /// The trimmed input line.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The normalised item name used for catalog lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units wanted.
    pub fn quantity(&self) -> NonZeroU64 {
        self.quantity
    }
}

/// Parse a grocery list into line items, in input order.
pub fn parse_list(text: &str) -> Vec<GroceryLineItem> {
    let items: Vec<GroceryLineItem> = text.lines().filter_map(GroceryLineItem::parse).collect();

    trace!(items = items.len(), "parsed grocery list");

    items
}

/// Normalise a product name for lookups: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a trimmed line into its name part and the digits of a trailing
/// `xN` marker, if it has one.
fn split_quantity(line: &str) -> (&str, Option<&str>) {
    let head = line.trim_end_matches(|ch: char| ch.is_ascii_digit());
    let digits = line.get(head.len()..).unwrap_or_default();

    if digits.is_empty() {
        return (line, None);
    }

    match head.strip_suffix('x').or_else(|| head.strip_suffix('X')) {
        Some(name) => (name, Some(digits)),
        None => (line, None),
    }
}
