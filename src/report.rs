//! Report
//!
//! Terminal rendering of an [`Assignment`]: one table per store that received
//! items, followed by a short summary.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    assignment::{AssignedItem, Assignment, StoreBucket},
    list::GroceryLineItem,
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Printable view of an assignment.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentReport<'a> {
    assignment: &'a Assignment,
}

impl<'a> AssignmentReport<'a> {
    /// Create a report for an assignment.
    pub fn new(assignment: &'a Assignment) -> Self {
        AssignmentReport { assignment }
    }

    /// Writes the per-store lists and the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        for bucket in self.assignment.used_buckets() {
            write_bucket(&mut out, bucket)?;
        }

        write_summary(&mut out, self.assignment)
    }
}

fn write_bucket(out: &mut impl io::Write, bucket: &StoreBucket) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Unit Price", "Sale", "Total"]);

    for item in bucket.items() {
        builder.push_record(item_cells(item));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..2), Alignment::right());
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "\n{}  (store total: {})", bucket.store(), bucket.total())?;
    writeln!(out, "{table}")?;

    Ok(())
}

fn item_cells(item: &AssignedItem) -> [String; 4] {
    [
        format!("{} x{}", item.name(), item.quantity()),
        format!("@ {}/ea", item.unit_price()),
        item.sale_tag().unwrap_or_default().to_string(),
        item.line_total().to_string(),
    ]
}

fn write_summary(out: &mut impl io::Write, assignment: &Assignment) -> Result<(), ReportError> {
    let has_spend = assignment.grand_total().to_minor_units() > 0;

    writeln!(out)?;

    if has_spend {
        writeln!(
            out,
            "Estimated spend across {} store(s): {}",
            assignment.used_stores(),
            assignment.grand_total()
        )?;
    }

    if assignment.is_fully_matched() {
        if has_spend {
            writeln!(out, "Nice! Every item was matched to at least one store.")?;
        }
    } else {
        let missing: Vec<&str> = assignment
            .unknown()
            .iter()
            .map(GroceryLineItem::raw_text)
            .collect();

        writeln!(out, "No price data for: {}.", missing.join(", "))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{
        assignment::assign,
        catalog::Catalog,
        list::parse_list,
        stores::{Store, StoreSelection},
    };

    use super::*;

    fn catalog() -> TestResult<Catalog> {
        let mut builder = Catalog::builder(USD);

        builder
            .price("milk", Store::Aldi, Money::from_minor(269, USD))?
            .price("milk", Store::Kuhns, Money::from_minor(319, USD))?
            .price("salmon", Store::Kuhns, Money::from_minor(949, USD))?
            .sale_tag("milk", Store::Aldi, "Weekly sale");

        Ok(builder.build()?)
    }

    fn render(assignment: &Assignment) -> TestResult<String> {
        let mut out = Vec::new();

        AssignmentReport::new(assignment).write_to(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn renders_used_stores_and_summary() -> TestResult {
        let catalog = catalog()?;
        let selection = StoreSelection::new([Store::Aldi, Store::Kuhns, Store::GiantEagle]);
        let assignment = assign(&parse_list("milk x2\nsalmon"), &selection, &catalog);

        let report = render(&assignment)?;

        assert!(report.contains("Aldi  (store total: $5.38)"), "{report}");
        assert!(report.contains("Kuhn's  (store total: $9.49)"), "{report}");
        assert!(report.contains("milk x2"), "{report}");
        assert!(report.contains("@ $2.69/ea"), "{report}");
        assert!(report.contains("Weekly sale"), "{report}");
        assert!(!report.contains("Giant Eagle"), "{report}");
        assert!(
            report.contains("Estimated spend across 2 store(s): $14.87"),
            "{report}"
        );
        assert!(report.contains("Nice! Every item was matched"), "{report}");

        Ok(())
    }

    #[test]
    fn lists_unknown_items_by_raw_text() -> TestResult {
        let catalog = catalog()?;
        let selection = StoreSelection::new([Store::Aldi]);
        let assignment = assign(&parse_list("Ice Cream x2\nmilk\nsalmon"), &selection, &catalog);

        let report = render(&assignment)?;

        assert!(
            report.contains("No price data for: Ice Cream x2, salmon."),
            "{report}"
        );
        assert!(!report.contains("Nice!"), "{report}");

        Ok(())
    }

    #[test]
    fn omits_spend_when_nothing_matched() -> TestResult {
        let catalog = catalog()?;
        let selection = StoreSelection::new([Store::ShopNSave]);
        let assignment = assign(&parse_list("milk"), &selection, &catalog);

        let report = render(&assignment)?;

        assert!(!report.contains("Estimated spend"), "{report}");
        assert!(report.contains("No price data for: milk."), "{report}");

        Ok(())
    }
}
