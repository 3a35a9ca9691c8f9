//! Card records as they appear in the MTG JSON catalog

use crate::core::{CardName, Color, ColorSet, Rarity, SetCode};
use crate::Result;
use serde::{Deserialize, Serialize};

/// The only layout the set file generator supports
pub const NORMAL_LAYOUT: &str = "normal";

/// One card object from a set's `cards` list
///
/// The same struct serves both as a card's field map (looked up by name) and
/// as a printing record (one per set the card appears in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub name: CardName,

    #[serde(default = "default_layout")]
    pub layout: String,

    /// Mana cost as printed, e.g. "{2}{W}{W}"
    #[serde(default)]
    pub mana_cost: Option<String>,

    /// Declared colors as full names ("White", "Blue", ...)
    #[serde(default)]
    pub colors: Vec<String>,

    #[serde(default)]
    pub supertypes: Vec<String>,

    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default)]
    pub subtypes: Vec<String>,

    /// Rarity label of this printing, e.g. "Mythic Rare"
    #[serde(default)]
    pub rarity: Option<String>,

    /// Rules text, one ability per line
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub power: Option<String>,

    #[serde(default)]
    pub toughness: Option<String>,

    #[serde(default)]
    pub loyalty: Option<serde_json::Value>,

    /// Names of all parts of a multi-part card
    #[serde(default)]
    pub names: Vec<String>,
}

fn default_layout() -> String {
    NORMAL_LAYOUT.to_string()
}

impl CardInfo {
    /// Create a normal-layout card with only a name
    pub fn new(name: impl Into<CardName>) -> Self {
        CardInfo {
            name: name.into(),
            layout: default_layout(),
            mana_cost: None,
            colors: Vec::new(),
            supertypes: Vec::new(),
            types: Vec::new(),
            subtypes: Vec::new(),
            rarity: None,
            text: None,
            power: None,
            toughness: None,
            loyalty: None,
            names: Vec::new(),
        }
    }

    pub fn is_normal_layout(&self) -> bool {
        self.layout == NORMAL_LAYOUT
    }

    pub fn has_type(&self, card_type: &str) -> bool {
        self.types.iter().any(|t| t == card_type)
    }

    /// Declared colors; names MTG JSON doesn't use are skipped
    pub fn declared_colors(&self) -> ColorSet {
        self.colors.iter().filter_map(|name| Color::from_name(name)).collect()
    }

    /// Loyalty as text; MTG JSON has used both numbers and strings here
    pub fn loyalty_text(&self) -> Option<String> {
        match self.loyalty.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Parse this printing's rarity label
    pub fn parsed_rarity(&self) -> Result<Rarity> {
        self.rarity.as_deref().unwrap_or_default().parse()
    }
}

/// A card's appearance in one set
#[derive(Debug, Clone, PartialEq)]
pub struct Printing<'a> {
    pub set_code: SetCode,
    pub card: &'a CardInfo,
}
