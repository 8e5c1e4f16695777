//! Inventory update engine.
//!
//! This crate contains the day-advance rules for the Gilded Rose inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod item;

pub use category::Category;
pub use engine::GildedRose;
pub use item::Item;
