//! Text-test fixture for the inventory engine.
//!
//! Builds an inventory, advances it day by day and prints every day's state.
//! All IO lives here; the engine crate stays pure.

pub mod args;
pub mod fixture;

use std::io::Write;

use anyhow::{Context, Result};

pub use args::{Cli, OutputFormat};

/// Run the fixture described by `cli`, writing the report to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let items = match &cli.inventory {
        Some(path) => fixture::load_inventory(path)?,
        None if !cli.items.is_empty() => cli.items.clone(),
        None => fixture::default_inventory(),
    };

    tracing::info!(items = items.len(), days = cli.days, "simulating inventory");

    match cli.format {
        OutputFormat::Text => {
            fixture::render_text(items, cli.days, out).context("writing text report")?
        }
        OutputFormat::Json => fixture::render_json(items, cli.days, out)?,
    }
    out.flush().context("flushing report")?;
    Ok(())
}
