//! Rarity tiers
//!
//! Tiers are totally ordered by rank. A card's rarity in the set file is the
//! lowest tier among all of its printings.

use crate::{MseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Basic,
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
}

/// (catalog label, set file display string), indexed by rank
const RARITY_TABLE: [(&str, &str); 6] = [
    ("Basic Land", "basic land"),
    ("Common", "common"),
    ("Uncommon", "uncommon"),
    ("Rare", "rare"),
    ("Mythic Rare", "mythic rare"),
    ("Special", "special"),
];

impl Rarity {
    const BY_RANK: [Rarity; 6] = [
        Rarity::Basic,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
        Rarity::Special,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical string written to the `rarity` field
    pub fn mse_str(self) -> &'static str {
        RARITY_TABLE[self.rank() as usize].1
    }

    /// Catalog label this tier is parsed from
    pub fn label(self) -> &'static str {
        RARITY_TABLE[self.rank() as usize].0
    }

    /// Lowest tier among the given rarities, `None` if there are none
    pub fn aggregate<I: IntoIterator<Item = Rarity>>(rarities: I) -> Option<Rarity> {
        rarities.into_iter().min()
    }
}

impl FromStr for Rarity {
    type Err = MseError;

    fn from_str(label: &str) -> Result<Self> {
        RARITY_TABLE
            .iter()
            .position(|(known, _)| *known == label)
            .map(|rank| Rarity::BY_RANK[rank])
            .ok_or_else(|| MseError::UnknownRarityLabel(label.to_string()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mse_str())
    }
}
