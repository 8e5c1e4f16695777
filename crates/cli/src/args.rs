//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gildedrose_inventory::Item;

/// Advance a Gilded Rose inventory and print each day.
#[derive(Debug, Parser)]
#[command(name = "gildedrose", version, about)]
pub struct Cli {
    /// Number of days to simulate after day 0.
    #[arg(long, short, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// Inventory entry as `<name>,<sellIn>,<quality>` (repeatable).
    #[arg(long = "item", value_name = "NAME,SELL_IN,QUALITY")]
    pub items: Vec<Item>,

    /// JSON file holding an array of `{"name", "sellIn", "quality"}` objects.
    #[arg(long, conflicts_with = "items")]
    pub inventory: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, env = "GILDED_ROSE_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `-------- day N --------` blocks.
    Text,
    /// Array of per-day snapshots.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_items() {
        let cli = Cli::parse_from([
            "gildedrose",
            "--days",
            "5",
            "--format",
            "text",
            "--item",
            "Sulfuras, Hand of Ragnaros,0,80",
            "--item",
            "Aged Brie,2,0",
        ]);
        assert_eq!(cli.days, 5);
        assert_eq!(
            cli.items,
            vec![
                Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
                Item::new("Aged Brie", 2, 0),
            ]
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_malformed_item() {
        let result = Cli::try_parse_from(["gildedrose", "--item", "Aged Brie,two,0"]);
        assert!(result.is_err());
    }

    #[test]
    fn inventory_conflicts_with_items() {
        let result = Cli::try_parse_from([
            "gildedrose",
            "--inventory",
            "stock.json",
            "--item",
            "Aged Brie,2,0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_json_format() {
        let cli = Cli::parse_from(["gildedrose", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
