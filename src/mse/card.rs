//! Mapping of catalog cards to MSE card records

use crate::core::{CardInfo, ManaCost, Rarity};
use crate::loader::Catalog;
use crate::mse::record::OrderedRecord;
use crate::{MseError, Result};

/// Builds the `card` record for one catalog card
pub struct CardRecordBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> CardRecordBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        CardRecordBuilder { catalog }
    }

    /// Look up a card by name and build its record
    pub fn build_by_name(&self, name: &str) -> Result<OrderedRecord> {
        self.build(self.catalog.card(name)?)
    }

    /// Build the record for a single-faced card
    ///
    /// Fails fast; the caller decides whether a failed card aborts the run.
    pub fn build(&self, card: &CardInfo) -> Result<OrderedRecord> {
        if !card.is_normal_layout() {
            return Err(MseError::UnsupportedLayout(card.layout.clone()));
        }
        let mut result = OrderedRecord::new();
        result.add("name", card.name.as_str());
        if let Some(cost) = &card.mana_cost {
            result.add("casting cost", cost.as_str());
        }

        // Validates the cost. Declared colors that disagree with it (devoid,
        // color indicators) are detected but not acted on yet.
        let implied = match &card.mana_cost {
            Some(cost) => ManaCost::parse(cost)?.colors(),
            None => Default::default(),
        };
        let _colors_match = implied == card.declared_colors();

        result.add("super type", type_line(card));
        if !card.subtypes.is_empty() {
            result.add("sub type", subtype_line(card));
        }
        result.add("rarity", self.rarity(card)?.mse_str());

        if let Some(text) = card.text.as_deref().map(rule_text) {
            if !text.is_empty() {
                result.add("rule text", text);
            }
        }
        if card.has_type("Planeswalker") {
            if let Some(loyalty) = card.loyalty_text() {
                result.add("loyalty", loyalty);
            }
        } else if let (Some(power), Some(toughness)) = (&card.power, &card.toughness) {
            result.add("power", power.as_str());
            result.add("toughness", toughness.as_str());
        }
        if let Some(stylesheet) = stylesheet(card) {
            result.add("stylesheet", stylesheet);
        }
        Ok(result)
    }

    /// Lowest rarity across every printing of the card
    fn rarity(&self, card: &CardInfo) -> Result<Rarity> {
        let printings = self.catalog.printings(card.name.as_str());
        let rarities = printings
            .iter()
            .map(|printing| printing.card.parsed_rarity())
            .collect::<Result<Vec<_>>>()?;
        Rarity::aggregate(rarities).ok_or_else(|| MseError::NoPrintingsFound(card.name.to_string()))
    }
}

/// Supertypes and card types, tagged as one type word list
fn type_line(card: &CardInfo) -> String {
    let words = card
        .supertypes
        .iter()
        .chain(card.types.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("<word-list-type>{words}</word-list-type>")
}

/// Subtypes, each tagged with the word list for the card's main type
fn subtype_line(card: &CardInfo) -> String {
    let category = subtype_category(card);
    card.subtypes
        .iter()
        .map(|subtype| format!("<word-list-{category}>{subtype}</word-list-{category}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn subtype_category(card: &CardInfo) -> String {
    if card.has_type("Creature") {
        "race".to_string()
    } else if card.has_type("Instant") || card.has_type("Sorcery") {
        "spell".to_string()
    } else {
        card.types
            .first()
            .map(|card_type| card_type.to_lowercase())
            .unwrap_or_default()
    }
}

/// Card frame for types the set's default frame can't lay out
fn stylesheet(card: &CardInfo) -> Option<&'static str> {
    let is_leveler = card
        .text
        .as_deref()
        .is_some_and(|text| text.lines().any(|line| line.starts_with("Level up")));
    if card.has_type("Plane") || card.has_type("Phenomenon") {
        Some("m15-mainframe-planes")
    } else if card.has_type("Planeswalker") {
        Some("m15-mainframe-planeswalker")
    } else if is_leveler {
        Some("m15-leveler")
    } else if card.has_type("Conspiracy") {
        Some("m15-ttk-conspiracy")
    } else {
        None
    }
}

/// Rules text without reminder text or blank lines
fn rule_text(text: &str) -> String {
    text.split('\n')
        .map(strip_reminder_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove parenthesized reminder text along with one leading space
fn strip_reminder_text(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|offset| open + offset) else {
            break;
        };
        if close == open + 1 {
            result.push_str(&rest[..=close]);
        } else {
            let before = &rest[..open];
            result.push_str(before.strip_suffix(' ').unwrap_or(before));
        }
        rest = &rest[close + 1..];
    }
    result.push_str(rest);
    result
}
