//! Set file generation for a list of card names
//!
//! Cards are processed one at a time in sorted name order. What happens when a
//! card fails depends on verbosity: verbose runs abort with the cause, quiet
//! runs record the failure in the report and carry on with the next card.

use crate::core::CardName;
use crate::loader::Catalog;
use crate::mse::{finish_set_file, new_set_file, CardRecordBuilder, OrderedRecord, SetFileOptions};
use crate::{MseError, Result};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Abort on the first failed card instead of counting failures
    pub verbose: bool,
    pub set_file: SetFileOptions,
}

/// Outcome of an import run
#[derive(Debug)]
pub struct ImportReport {
    pub set_file: OrderedRecord,
    /// Names of cards that were added, in set file order
    pub added: Vec<CardName>,
    /// Names of cards that failed (quiet mode only)
    pub failed: Vec<CardName>,
}

impl ImportReport {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Build the complete set file for the given card names
pub fn import_cards(
    catalog: &Catalog,
    names: &BTreeSet<CardName>,
    options: &ImportOptions,
) -> Result<ImportReport> {
    if names.is_empty() {
        return Err(MseError::NoCardNames);
    }
    let builder = CardRecordBuilder::new(catalog);
    let mut set_file = new_set_file(&options.set_file, names.len());
    let mut added = Vec::new();
    let mut failed = Vec::new();

    for (i, name) in names.iter().enumerate() {
        tracing::debug!(card = %name, "adding card {} of {}", i + 1, names.len());
        match builder.build_by_name(name.as_str()) {
            Ok(card) => {
                set_file.add("card", card);
                added.push(name.clone());
            }
            Err(e) if options.verbose => {
                return Err(MseError::CardFailed {
                    card: name.to_string(),
                    source: Box::new(e),
                });
            }
            Err(e) => {
                tracing::debug!(card = %name, error = %e, "card failed");
                failed.push(name.clone());
            }
        }
    }

    finish_set_file(&mut set_file);
    Ok(ImportReport {
        set_file,
        added,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            br#"{"M10": {"name": "Magic 2010", "code": "M10", "cards": [
                {"name": "Lightning Bolt", "manaCost": "{R}", "types": ["Instant"], "rarity": "Common"},
                {"name": "Fire", "layout": "split", "manaCost": "{1}{R}", "types": ["Instant"], "rarity": "Uncommon"}
            ]}}"#,
        )
        .unwrap()
    }

    fn names(list: &[&str]) -> BTreeSet<CardName> {
        list.iter().map(|&name| CardName::from(name)).collect()
    }

    #[test]
    fn test_empty_name_set() {
        let result = import_cards(&catalog(), &BTreeSet::new(), &ImportOptions::default());
        assert!(matches!(result, Err(MseError::NoCardNames)));
    }

    #[test]
    fn test_quiet_mode_counts_failures() {
        let report = import_cards(
            &catalog(),
            &names(&["Lightning Bolt", "Fire", "Black Lotus"]),
            &ImportOptions::default(),
        )
        .unwrap();
        assert_eq!(report.added, names(&["Lightning Bolt"]).into_iter().collect::<Vec<_>>());
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.failed, names(&["Black Lotus", "Fire"]).into_iter().collect::<Vec<_>>());
        assert_eq!(report.set_file.get_all("card").count(), 1);
        assert!(report.set_file.contains("apprentice code"));
    }

    #[test]
    fn test_verbose_mode_aborts_with_card_name() {
        let options = ImportOptions {
            verbose: true,
            ..ImportOptions::default()
        };
        match import_cards(&catalog(), &names(&["Fire", "Lightning Bolt"]), &options) {
            Err(MseError::CardFailed { card, source }) => {
                assert_eq!(card, "Fire");
                assert!(matches!(*source, MseError::UnsupportedLayout(ref layout) if layout == "split"));
            }
            other => panic!("expected CardFailed, got {other:?}"),
        }
    }
}
