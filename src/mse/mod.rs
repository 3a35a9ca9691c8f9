//! Magic Set Editor data files
//!
//! In-memory model of MSE's `key: value` data file format, its text
//! rendering, the mapping from catalog cards to card records, and the
//! archive the rendered set file is shipped in.

pub mod archive;
pub mod card;
pub mod record;
pub mod set_file;
pub mod writer;

pub use archive::{write_archive, Output, SET_ENTRY};
pub use card::CardRecordBuilder;
pub use record::{OrderedRecord, Value};
pub use set_file::{finish_set_file, new_set_file, BorderColor, SetFileOptions};
pub use writer::write_record;
