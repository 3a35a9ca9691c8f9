//! Mana cost parsing and implied color identity

use crate::{MseError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The five colors of Magic, in canonical WUBRG order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in canonical order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parse a single-letter color symbol (W, U, B, R, G)
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'W' => Some(Color::White),
            b'U' => Some(Color::Blue),
            b'B' => Some(Color::Black),
            b'R' => Some(Color::Red),
            b'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// Parse a full color name as used by MTG JSON ("White", "Blue", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        Color::ALL.into_iter().find(|color| color.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// A set of colors. Iteration always yields WUBRG order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    pub fn new() -> Self {
        ColorSet(0)
    }

    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(move |&color| self.contains(color))
    }

    /// Color names in canonical order, full ("White") or abbreviated ("W")
    pub fn names(&self, short: bool) -> Vec<&'static str> {
        self.iter()
            .map(|color| if short { color.abbreviation() } else { color.name() })
            .collect()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

/// One brace-delimited part of a mana cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManaSymbol {
    /// {W}, {U}, {B}, {R}, {G}
    Colored(Color),
    /// {C}
    Colorless,
    /// {S}
    Snow,
    /// {X}
    Variable,
    /// {0}, {1}, {12}, ...
    Generic(u32),
    /// {W/U} and the other colored/colored hybrids
    Hybrid(Color, Color),
    /// {2/W} and the other colorless/colored hybrids
    TwoBrid(Color),
    /// {W/P} and the other Phyrexian symbols
    Phyrexian(Color),
}

impl ManaSymbol {
    /// Classify the text between a pair of braces
    pub fn parse(part: &str) -> Result<Self> {
        let unrecognized = || MseError::UnrecognizedManaCostPart(part.to_string());
        let symbol = match part.as_bytes() {
            [b'C'] => ManaSymbol::Colorless,
            [b'S'] => ManaSymbol::Snow,
            [b'X'] => ManaSymbol::Variable,
            [c] if c.is_ascii_digit() => ManaSymbol::Generic(u32::from(c - b'0')),
            [c] => ManaSymbol::Colored(Color::from_symbol(*c).ok_or_else(unrecognized)?),
            [b'2', b'/', c] => ManaSymbol::TwoBrid(Color::from_symbol(*c).ok_or_else(unrecognized)?),
            [a, b'/', b'P'] => ManaSymbol::Phyrexian(Color::from_symbol(*a).ok_or_else(unrecognized)?),
            [a, b'/', b] => match (Color::from_symbol(*a), Color::from_symbol(*b)) {
                (Some(left), Some(right)) => ManaSymbol::Hybrid(left, right),
                _ => return Err(unrecognized()),
            },
            digits if !digits.is_empty() && digits.iter().all(u8::is_ascii_digit) => {
                // Oversized amounts saturate; the shape alone makes the part valid
                ManaSymbol::Generic(part.parse().unwrap_or(u32::MAX))
            }
            _ => return Err(unrecognized()),
        };
        Ok(symbol)
    }

    /// Colors this symbol contributes to a card's color identity
    pub fn colors(&self) -> SmallVec<[Color; 2]> {
        match *self {
            ManaSymbol::Colored(color) | ManaSymbol::TwoBrid(color) | ManaSymbol::Phyrexian(color) => {
                SmallVec::from_slice(&[color])
            }
            ManaSymbol::Hybrid(left, right) => SmallVec::from_slice(&[left, right]),
            ManaSymbol::Colorless | ManaSymbol::Snow | ManaSymbol::Variable | ManaSymbol::Generic(_) => {
                SmallVec::new()
            }
        }
    }
}

/// A validated mana cost such as `{2}{W}{W}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManaCost {
    symbols: Vec<ManaSymbol>,
}

impl ManaCost {
    pub fn new() -> Self {
        ManaCost::default()
    }

    /// Parse a mana cost string like "{2}{W}{W}" or "{R/G}"
    ///
    /// The empty string and `{}` both parse to an empty cost.
    pub fn parse(cost: &str) -> Result<Self> {
        if cost.is_empty() {
            return Ok(ManaCost::new());
        }
        let inner = cost
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| MseError::MalformedCost(cost.to_string()))?;
        if inner.is_empty() {
            return Ok(ManaCost::new());
        }
        let symbols = inner
            .split("}{")
            .map(ManaSymbol::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(ManaCost { symbols })
    }

    pub fn symbols(&self) -> &[ManaSymbol] {
        &self.symbols
    }

    /// Union of the colors of every symbol
    pub fn colors(&self) -> ColorSet {
        self.symbols.iter().flat_map(ManaSymbol::colors).collect()
    }
}

/// Colors implied by an optional cost string, in WUBRG order
pub fn implied_colors(cost: Option<&str>, short: bool) -> Result<Vec<&'static str>> {
    let colors = match cost {
        Some(cost) => ManaCost::parse(cost)?.colors(),
        None => ColorSet::new(),
    };
    Ok(colors.names(short))
}
