use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

/// A stock entry: name plus the two attributes the engine advances each day.
///
/// The name also decides which rule applies (see [`crate::Category::of`]).
/// Construction does not validate ranges; a legendary item is expected to
/// carry quality 80.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Floor for every non-legendary quality.
    pub const MIN_QUALITY: i32 = 0;
    /// Ceiling for every non-legendary quality.
    pub const MAX_QUALITY: i32 = 50;

    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

/// Text-test layout: `name, sellIn, quality`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses `<name>,<sellIn>,<quality>`.
///
/// The two numbers are taken from the right so names containing commas
/// ("Sulfuras, Hand of Ragnaros") survive intact.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::validation(format!(
                "expected `<name>,<sellIn>,<quality>`, got {s:?}"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self::new(
            name,
            parse_field("sellIn", sell_in)?,
            parse_field("quality", quality)?,
        ))
    }
}

fn parse_field(field: &'static str, raw: &str) -> DomainResult<i32> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| DomainError::invalid_number(field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_triple() {
        let item: Item = "Aged Brie,2,0".parse().unwrap();
        assert_eq!(item, Item::new("Aged Brie", 2, 0));
    }

    #[test]
    fn parses_name_containing_commas() {
        let item: Item = "Sulfuras, Hand of Ragnaros, -1, 80".parse().unwrap();
        assert_eq!(item.name, "Sulfuras, Hand of Ragnaros");
        assert_eq!(item.sell_in, -1);
        assert_eq!(item.quality, 80);
    }

    #[test]
    fn rejects_missing_fields() {
        let err = "Aged Brie,2".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = " ,2,0".parse::<Item>().unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn rejects_non_numeric_quality() {
        let err = "Aged Brie,2,lots".parse::<Item>().unwrap_err();
        assert_eq!(err, DomainError::invalid_number("quality", "lots"));
    }

    #[test]
    fn display_matches_fixture_layout() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(item.to_string(), "Elixir of the Mongoose, 5, 7");
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Conjured Mana Cake", "sellIn": 3, "quality": 6})
        );
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
