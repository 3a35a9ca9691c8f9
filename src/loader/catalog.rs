//! MTG JSON card catalog
//!
//! Reads an MTG JSON v3 "AllSets" document: set code -> set object with a
//! `cards` list. Version 4 and later wrap the sets in `{"meta", "data"}` and
//! use different rarity labels, so that layout is rejected.

use crate::core::{CardInfo, CardName, Printing, SetCode};
use crate::{MseError, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One set from the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct SetInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    pub cards: Vec<CardInfo>,
}

/// All sets of the catalog plus a by-name index
pub struct Catalog {
    sets: BTreeMap<SetCode, SetInfo>,
    /// Card name -> (set code, index into that set's cards) of its first printing
    by_name: FxHashMap<CardName, (SetCode, usize)>,
}

impl Catalog {
    /// Build a catalog from sets keyed by set code
    pub fn from_sets(sets: BTreeMap<SetCode, SetInfo>) -> Self {
        let mut by_name = FxHashMap::default();
        for (code, set) in &sets {
            for (idx, card) in set.cards.iter().enumerate() {
                by_name
                    .entry(card.name.clone())
                    .or_insert_with(|| (code.clone(), idx));
            }
        }
        Catalog { sets, by_name }
    }

    /// Parse an MTG JSON "AllSets" document
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let sets: BTreeMap<SetCode, SetInfo> = serde_json::from_slice(bytes)?;
        Ok(Self::from_sets(sets))
    }

    /// A card's field map, by exact name
    pub fn card(&self, name: &str) -> Result<&CardInfo> {
        let (code, idx) = self
            .by_name
            .get(&CardName::from(name))
            .ok_or_else(|| MseError::CardNotFound(name.to_string()))?;
        self.sets
            .get(code)
            .and_then(|set| set.cards.get(*idx))
            .ok_or_else(|| MseError::CardNotFound(name.to_string()))
    }

    /// Every printing of a card, at most one per set, in set code order
    pub fn printings(&self, name: &str) -> Vec<Printing<'_>> {
        self.sets
            .iter()
            .filter_map(|(code, set)| {
                set.cards
                    .iter()
                    .rfind(|card| card.name.as_str() == name)
                    .map(|card| Printing {
                        set_code: code.clone(),
                        card,
                    })
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&CardName::from(name))
    }

    /// All card names, sorted
    pub fn card_names(&self) -> Vec<&CardName> {
        let mut names: Vec<_> = self.by_name.keys().collect();
        names.sort();
        names
    }

    pub fn sets(&self) -> impl Iterator<Item = (&SetCode, &SetInfo)> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "LEA": {
            "name": "Limited Edition Alpha",
            "code": "LEA",
            "cards": [
                {"name": "Shivan Dragon", "manaCost": "{4}{R}{R}", "types": ["Creature"], "rarity": "Rare"},
                {"name": "Forest", "supertypes": ["Basic"], "types": ["Land"], "rarity": "Basic Land"}
            ]
        },
        "M10": {
            "name": "Magic 2010",
            "code": "M10",
            "cards": [
                {"name": "Shivan Dragon", "manaCost": "{4}{R}{R}", "types": ["Creature"], "rarity": "Rare"}
            ]
        }
    }"#;

    #[test]
    fn test_load_bare_document() {
        let catalog = Catalog::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Forest"));
        assert_eq!(catalog.sets().count(), 2);
        assert_eq!(
            catalog.card_names().iter().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["Forest", "Shivan Dragon"]
        );
    }

    #[test]
    fn test_wrapped_document_is_rejected() {
        let wrapped = format!(r#"{{"meta": {{"version": "4.0"}}, "data": {SAMPLE}}}"#);
        assert!(matches!(
            Catalog::from_json(wrapped.as_bytes()),
            Err(MseError::CatalogFormat(_))
        ));
    }

    #[test]
    fn test_card_lookup_by_name() {
        let catalog = Catalog::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.card("Forest").unwrap().supertypes, vec!["Basic"]);
    }

    #[test]
    fn test_printings_across_sets() {
        let catalog = Catalog::from_json(SAMPLE.as_bytes()).unwrap();
        let codes: Vec<_> = catalog
            .printings("Shivan Dragon")
            .into_iter()
            .map(|printing| printing.set_code.to_string())
            .collect();
        assert_eq!(codes, vec!["LEA", "M10"]);
        assert!(catalog.printings("Black Lotus").is_empty());
    }

    #[test]
    fn test_card_not_found() {
        let catalog = Catalog::from_json(SAMPLE.as_bytes()).unwrap();
        assert!(matches!(
            catalog.card("Black Lotus"),
            Err(MseError::CardNotFound(name)) if name == "Black Lotus"
        ));
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            Catalog::from_json(b"[1, 2, 3]"),
            Err(MseError::CatalogFormat(_))
        ));
    }
}
