//! Set file header and footer fields

use crate::mse::record::{OrderedRecord, Value};

pub const MSE_VERSION: &str = "0.3.8";
pub const STYLESHEET: &str = "m15-altered";

/// Frame border color of the generated set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderColor {
    #[default]
    Black,
    White,
    Silver,
    Gold,
    Bronze,
}

impl BorderColor {
    /// `rgb(...)` value for the `border color` field; black is the template default
    pub fn rgb(self) -> Option<&'static str> {
        match self {
            BorderColor::Black => None,
            BorderColor::White => Some("rgb(255,255,255)"),
            BorderColor::Silver => Some("rgb(128,128,128)"),
            BorderColor::Gold => Some("rgb(200,180,0)"),
            BorderColor::Bronze => Some("rgb(222,127,50)"),
        }
    }
}

/// Values for the `set info` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFileOptions {
    pub copyright: String,
    pub set_code: String,
    pub auto_card_numbers: bool,
    pub border_color: BorderColor,
}

impl Default for SetFileOptions {
    fn default() -> Self {
        SetFileOptions {
            copyright: "NOT FOR SALE".to_string(),
            set_code: "PROXY".to_string(),
            auto_card_numbers: false,
            border_color: BorderColor::default(),
        }
    }
}

/// Root record with every field that goes above the cards
pub fn new_set_file(options: &SetFileOptions, num_cards: usize) -> OrderedRecord {
    let description = format!(
        "{} automatically imported from MTG JSON using json-to-mse.",
        if num_cards == 1 {
            "This card was"
        } else {
            "These cards were"
        }
    );
    let mut set_info: OrderedRecord = [
        ("title", "MTG JSON card import"),
        ("copyright", options.copyright.as_str()),
        ("description", description.as_str()),
        ("set code", options.set_code.as_str()),
        ("set language", "EN"),
        ("mark errors", "no"),
        ("automatic reminder text", ""),
        (
            "automatic card numbers",
            if options.auto_card_numbers { "yes" } else { "no" },
        ),
        ("mana cost sorting", "unsorted"),
    ]
    .into_iter()
    .collect();
    if let Some(rgb) = options.border_color.rgb() {
        set_info.add("border color", rgb);
    }

    let mut set_file = OrderedRecord::new();
    set_file.add("mse version", MSE_VERSION);
    set_file.add("game", "magic");
    set_file.add("stylesheet", STYLESHEET);
    set_file.add("set info", set_info);
    // styling must come before the cards
    set_file.add(
        "styling",
        Value::from_iter([(
            format!("magic-{STYLESHEET}"),
            Value::from_iter([
                ("text box mana symbols", "magic-mana-small.mse-symbol-font"),
                ("center text", "short text only"),
                ("overlay", ""),
            ]),
        )]),
    );
    set_file
}

/// Append the fields that go below the cards
pub fn finish_set_file(set_file: &mut OrderedRecord) {
    set_file.add("version control", Value::from_iter([("type", "none")]));
    set_file.add("apprentice code", "");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MseError;

    #[test]
    fn test_header_fields() {
        let set_file = new_set_file(&SetFileOptions::default(), 2);
        let keys: Vec<_> = set_file.entries().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["mse version", "game", "stylesheet", "set info", "styling"]
        );
        assert_eq!(set_file.get_unique("game").unwrap().as_scalar(), Some("magic"));

        let set_info = set_file.get_unique("set info").unwrap().as_record().unwrap();
        assert_eq!(
            set_info.get_unique("description").unwrap().as_scalar(),
            Some("These cards were automatically imported from MTG JSON using json-to-mse.")
        );
        assert_eq!(set_info.get_unique("set code").unwrap().as_scalar(), Some("PROXY"));
        assert_eq!(set_info.get_unique("set language").unwrap().as_scalar(), Some("EN"));
        assert!(!set_info.contains("border color"));
    }

    #[test]
    fn test_single_card_description_and_options() {
        let options = SetFileOptions {
            copyright: "Fan art".to_string(),
            set_code: "FAN".to_string(),
            auto_card_numbers: true,
            border_color: BorderColor::Gold,
        };
        let set_file = new_set_file(&options, 1);
        let set_info = set_file.get_unique("set info").unwrap().as_record().unwrap();
        assert!(set_info
            .get_unique("description")
            .unwrap()
            .as_scalar()
            .unwrap()
            .starts_with("This card was"));
        assert_eq!(set_info.get_unique("copyright").unwrap().as_scalar(), Some("Fan art"));
        assert_eq!(
            set_info.get_unique("automatic card numbers").unwrap().as_scalar(),
            Some("yes")
        );
        assert_eq!(
            set_info.get_unique("border color").unwrap().as_scalar(),
            Some("rgb(200,180,0)")
        );
    }

    #[test]
    fn test_footer_fields() {
        let mut set_file = new_set_file(&SetFileOptions::default(), 0);
        finish_set_file(&mut set_file);
        let version_control = set_file
            .get_unique("version control")
            .unwrap()
            .as_record()
            .unwrap();
        assert_eq!(version_control.get_unique("type").unwrap().as_scalar(), Some("none"));
        assert!(matches!(
            set_file.set_unique("apprentice code", "x"),
            Err(MseError::DuplicateKey(_))
        ));
    }
}
