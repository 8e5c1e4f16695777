//! Inventory loading, day-by-day simulation and report rendering.
//!
//! Days are rendered as they are produced; only the current inventory is held
//! in memory regardless of how many days are simulated.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer as _};

use gildedrose_inventory::{GildedRose, Item};

/// The stock the fixture runs when no inventory is supplied.
pub fn default_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Read a JSON array of items.
pub fn load_inventory(path: &Path) -> Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading inventory {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing inventory {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}

/// State of the whole inventory at the start of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

/// Visit day 0 through `days` inclusive, advancing the engine between visits.
///
/// Stops at the first error returned by `visit`.
pub fn simulate<E>(
    items: Vec<Item>,
    days: u32,
    mut visit: impl FnMut(DaySnapshot<'_>) -> Result<(), E>,
) -> Result<(), E> {
    let mut rose = GildedRose::new(items);

    for day in 0..=days {
        visit(DaySnapshot {
            day,
            items: rose.items(),
        })?;
        if day < days {
            rose.advance_day();
        }
    }

    Ok(())
}

pub fn render_text(items: Vec<Item>, days: u32, out: &mut impl Write) -> io::Result<()> {
    simulate(items, days, |snapshot| {
        writeln!(out, "-------- day {} --------", snapshot.day)?;
        writeln!(out, "name, sellIn, quality")?;
        for item in snapshot.items {
            writeln!(out, "{item}")?;
        }
        writeln!(out)
    })
}

/// Stream the report as a JSON array, one element per day.
pub fn render_json(items: Vec<Item>, days: u32, out: &mut impl Write) -> Result<()> {
    let mut ser = serde_json::Serializer::pretty(&mut *out);
    let mut seq = ser.serialize_seq(None).context("serializing report")?;
    simulate(items, days, |snapshot| seq.serialize_element(&snapshot))
        .context("serializing report")?;
    seq.end().context("serializing report")?;
    writeln!(out).context("writing report")?;
    Ok(())
}
