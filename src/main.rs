//! Grocery Deals command line front end

use std::{io, process::ExitCode};

use tracing::{error, info};

use grocery_deals::prelude::*;

use crate::cli::{Config, error::AppError, logging::init_subscriber};

mod cli;

/// Grocery Deals entry point
pub fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|err| err.exit());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "grocery-deals failed");

            #[expect(clippy::print_stderr, reason = "errors are reported to the user")]
            {
                eprintln!("Error: {err}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    init_subscriber(&config.logging)?;

    let catalog = match config.catalog.as_deref() {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    let (selection, items) = shopping_request(config)?;

    info!(
        items = items.len(),
        stores = selection.len(),
        products = catalog.len(),
        "optimising grocery list"
    );

    let assignment = assign(&items, &selection, &catalog);

    let stdout = io::stdout();

    AssignmentReport::new(&assignment).write_to(stdout.lock())?;

    Ok(())
}

/// Store selection and parsed list, rejecting an empty selection before the
/// list is read and an empty list after it is parsed.
fn shopping_request(config: &Config) -> Result<(StoreSelection, Vec<GroceryLineItem>), AppError> {
    let selection = StoreSelection::new(config.stores.iter().copied());

    if selection.is_empty() {
        return Err(AppError::NoStoresSelected);
    }

    let text = config.read_list().map_err(AppError::ReadList)?;
    let items = parse_list(&text);

    if items.is_empty() {
        return Err(AppError::EmptyList);
    }

    Ok((selection, items))
}
