//! Item categories and their day-advance rules.

use crate::item::Item;

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_NAME: &str = "Aged Brie";
pub const BACKSTAGE_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Closed set of item categories.
///
/// Resolved from the item name once; an item never changes category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Legendary,
    Aged,
    BackstagePass,
    Conjured,
    Normal,
}

impl Category {
    /// Resolve a category from an item name (first match wins).
    pub fn of(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            AGED_NAME => Category::Aged,
            BACKSTAGE_NAME => Category::BackstagePass,
            n if n.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    /// Stable lowercase tag, used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::Aged => "aged",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    /// One day's transition of `(sell_in, quality)` for this category.
    ///
    /// `sell_in` is decremented first; the quality tier is picked from the
    /// decremented value.
    pub fn next_state(self, sell_in: i32, quality: i32) -> (i32, i32) {
        if self.is_legendary() {
            return (sell_in, quality);
        }

        let sell_in = sell_in.saturating_sub(1);
        let expired = sell_in < 0;

        let quality = match self {
            Category::Legendary => quality,
            Category::Aged => {
                let q = raise(quality, 1);
                if expired { raise(q, 1) } else { q }
            }
            Category::BackstagePass => {
                if expired {
                    // Concert is over; not a clamp.
                    0
                } else {
                    let mut q = raise(quality, 1);
                    if sell_in < 10 {
                        q = raise(q, 1);
                    }
                    if sell_in < 5 {
                        q = raise(q, 1);
                    }
                    q
                }
            }
            Category::Conjured => {
                let q = lower(quality, 2);
                if expired { lower(q, 2) } else { q }
            }
            Category::Normal => {
                let q = lower(quality, 1);
                if expired { lower(q, 1) } else { q }
            }
        };

        (sell_in, quality)
    }
}

fn raise(quality: i32, amount: i32) -> i32 {
    quality.saturating_add(amount).min(Item::MAX_QUALITY)
}

fn lower(quality: i32, amount: i32) -> i32 {
    quality.saturating_sub(amount).max(Item::MIN_QUALITY)
}
