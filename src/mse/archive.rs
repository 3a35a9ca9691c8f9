//! `.mse-set` archive output
//!
//! A set file is a zip archive whose single entry, `set`, holds the rendered
//! data file.

use crate::mse::record::OrderedRecord;
use crate::{MseError, Result};
use std::fs::OpenOptions;
use std::io::{self, Cursor, Seek, Write};
use std::path::PathBuf;
use std::str::FromStr;
use zip::write::FileOptions;
use zip::ZipWriter;

/// Name of the archive entry holding the data file
pub const SET_ENTRY: &str = "set";

/// Write `set_file` as the only entry of a new archive
pub fn write_archive<W: Write + Seek>(set_file: &OrderedRecord, out: W) -> Result<W> {
    let mut zip = ZipWriter::new(out);
    zip.start_file(SET_ENTRY, FileOptions::default())?;
    zip.write_all(set_file.to_string().as_bytes())?;
    Ok(zip.finish()?)
}

/// Output destination for the set archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A new file; an existing file at the path is an error
    File(PathBuf),
    Stdout,
}

impl FromStr for Output {
    type Err = MseError;

    fn from_str(s: &str) -> Result<Output> {
        Ok(if s == "=" || s == "-" {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(s))
        })
    }
}

impl Output {
    pub fn write_set_file(&self, set_file: &OrderedRecord) -> Result<()> {
        match self {
            Output::File(path) => {
                let file = OpenOptions::new().write(true).create_new(true).open(path)?;
                write_archive(set_file, file)?;
            }
            Output::Stdout => {
                let buf = write_archive(set_file, Cursor::new(Vec::new()))?;
                let mut stdout = io::stdout().lock();
                stdout.write_all(buf.get_ref())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::io::Read;

    fn sample() -> OrderedRecord {
        let mut record = OrderedRecord::new();
        record.add("mse version", "0.3.8");
        record.add("game", "magic");
        record
    }

    #[test]
    fn test_archive_has_single_set_entry() {
        let buf = write_archive(&sample(), Cursor::new(Vec::new())).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(archive.len(), 1);

        let mut contents = String::new();
        archive
            .by_name(SET_ENTRY)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "mse version: 0.3.8\r\ngame: magic\r\n");
    }

    #[test]
    fn test_file_output_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxies.mse-set");

        let output: Output = path.to_str().unwrap().parse().unwrap();
        output.write_set_file(&sample()).unwrap();
        assert!(path.exists());

        match output.write_set_file(&sample()) {
            Err(MseError::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::AlreadyExists),
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_output() {
        assert_eq!("=".parse::<Output>().unwrap(), Output::Stdout);
        assert_eq!(
            "out.mse-set".parse::<Output>().unwrap(),
            Output::File(PathBuf::from("out.mse-set"))
        );
    }
}
