//! Text rendering of MSE data files
//!
//! Grammar:
//! - a scalar renders as `key: value`
//! - a nested record renders as `key:` followed by its entries one tab deeper
//! - a scalar containing line breaks renders as `key:` followed by each line
//!   one tab deeper
//!
//! Every line ends in CR LF.

use crate::mse::record::{OrderedRecord, Value};
use std::fmt::{self, Write};

const LINE_END: &str = "\r\n";

/// Render a record and its children at the given indentation depth
pub fn write_record<W: Write>(out: &mut W, record: &OrderedRecord, indent: usize) -> fmt::Result {
    for (key, value) in record.entries() {
        write_indent(out, indent)?;
        match value {
            Value::Scalar(text) if text.contains('\n') => {
                write!(out, "{key}:{LINE_END}")?;
                for line in text.split('\n') {
                    write_indent(out, indent + 1)?;
                    write!(out, "{line}{LINE_END}")?;
                }
            }
            Value::Scalar(text) => write!(out, "{key}: {text}{LINE_END}")?,
            Value::Record(child) => {
                write!(out, "{key}:{LINE_END}")?;
                write_record(out, child, indent + 1)?;
            }
        }
    }
    Ok(())
}

fn write_indent<W: Write>(out: &mut W, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_char('\t')?;
    }
    Ok(())
}

impl fmt::Display for OrderedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_single_scalar() {
        let record: OrderedRecord = [("name", "value")].into_iter().collect();
        assert_eq!(record.to_string(), "name: value\r\n");
    }

    #[test]
    fn test_nested_record() {
        let mut record = OrderedRecord::new();
        record.add("mse version", "0.3.8");
        record.add(
            "set info",
            Value::from_iter([("title", "Proxies"), ("set language", "EN")]),
        );
        assert_eq!(
            record.to_string(),
            "mse version: 0.3.8\r\nset info:\r\n\ttitle: Proxies\r\n\tset language: EN\r\n"
        );
    }

    #[test]
    fn test_multiline_scalar() {
        let mut card = OrderedRecord::new();
        card.add("name", "Serra Angel");
        card.add("rule text", "Flying\nVigilance");
        let mut set = OrderedRecord::new();
        set.add("card", card);
        assert_eq!(
            set.to_string(),
            "card:\r\n\tname: Serra Angel\r\n\trule text:\r\n\t\tFlying\r\n\t\tVigilance\r\n"
        );
    }

    #[test]
    fn test_empty_scalar_keeps_separator() {
        let record: OrderedRecord = [("apprentice code", "")].into_iter().collect();
        assert_eq!(record.to_string(), "apprentice code: \r\n");
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            let mut record = OrderedRecord::new();
            record.add("card", Value::from_iter([("name", "Opt")]));
            record.add("card", Value::from_iter([("name", "Shock")]));
            record
        };
        assert_eq!(build().to_string(), build().to_string());
    }
}
