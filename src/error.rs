//! Error types for the MTG JSON to MSE converter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MseError {
    #[error("Key already present: {0:?}")]
    DuplicateKey(String),

    #[error("Expected exactly one value for key {key:?}, found {found}")]
    AmbiguousKeyLookup { key: String, found: usize },

    #[error("Unknown mana cost part: {{{0}}}")]
    UnrecognizedManaCostPart(String),

    #[error("Cost must start with {{ and end with }}: {0:?}")]
    MalformedCost(String),

    #[error("Unknown rarity: {0:?}")]
    UnknownRarityLabel(String),

    #[error("Unsupported layout: {0}")]
    UnsupportedLayout(String),

    #[error("No printings found for {0}")]
    NoPrintingsFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Failed to add card {card}")]
    CardFailed {
        card: String,
        #[source]
        source: Box<MseError>,
    },

    #[error("Missing card name")]
    NoCardNames,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid card catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error("Catalog download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, MseError>;
