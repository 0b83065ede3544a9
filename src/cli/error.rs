//! Application errors

use std::io;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use grocery_deals::{catalog::CatalogError, report::ReportError};

/// Errors surfaced to the user by the command line front end.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    /// The price catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The grocery list could not be read.
    #[error("Failed to read grocery list: {0}")]
    ReadList(#[source] io::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    /// No store was selected.
    #[error("Select at least one store first.")]
    NoStoresSelected,

    /// The grocery list holds no items.
    #[error("Enter at least one grocery item.")]
    EmptyList,
}
