//! Core card data types

pub mod card;
pub mod mana;
pub mod rarity;
pub mod types;

pub use card::{CardInfo, Printing, NORMAL_LAYOUT};
pub use mana::{implied_colors, Color, ColorSet, ManaCost, ManaSymbol};
pub use rarity::Rarity;
pub use types::{CardName, SetCode};
