//! The update engine: owns the stock and advances it one day at a time.

use crate::category::Category;
use crate::item::Item;

/// Holds an ordered inventory and applies the per-category rules to it.
///
/// Categories are resolved once at construction and kept alongside the items,
/// so a day-advance never re-inspects names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    categories: Vec<Category>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        let categories = items.iter().map(|item| Category::of(&item.name)).collect();
        Self { items, categories }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn category_of(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    /// Advance every item by exactly one day, in collection order.
    pub fn advance_day(&mut self) {
        let _span = tracing::debug_span!("advance_day", items = self.items.len()).entered();

        for (item, category) in self.items.iter_mut().zip(&self.categories) {
            let (sell_in, quality) = category.next_state(item.sell_in, item.quality);
            tracing::trace!(
                name = %item.name,
                category = category.label(),
                sell_in_before = item.sell_in,
                quality_before = item.quality,
                sell_in,
                quality,
                "item advanced"
            );
            item.sell_in = sell_in;
            item.quality = quality;
        }
    }

    /// Alias of [`GildedRose::advance_day`] under its traditional name.
    pub fn update_quality(&mut self) {
        self.advance_day();
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }
}
