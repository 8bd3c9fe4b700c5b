//! Roster input sources.
//!
//! The roster is fetched exactly once at startup, either from a JSON file or
//! from piped stdin. Both carry the same payload: a JSON array of
//! `{id, name, email, role}` objects.

use crate::model::Record;
use crate::model::error::InputError;
use std::collections::HashSet;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the roster comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// JSON file on disk.
    File(FileSource),
    /// JSON piped on stdin.
    Stdin(StdinSource),
}

impl InputSource {
    /// Read and parse the whole roster.
    ///
    /// Consumes the source: there is no second fetch.
    ///
    /// # Errors
    ///
    /// Any read or parse failure. The caller reports it and starts empty.
    pub fn load(self) -> Result<Vec<Record>, InputError> {
        let payload = match self {
            InputSource::File(f) => f.read_to_string()?,
            InputSource::Stdin(s) => s.read_to_string()?,
        };
        parse_records(&payload)
    }

    /// Short human label, used in logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Parse a roster payload.
///
/// Ids must be unique. Order is preserved.
///
/// # Errors
///
/// `Parse` when the payload is not an array of well-formed records,
/// `DuplicateId` when two records share an id.
pub fn parse_records(payload: &str) -> Result<Vec<Record>, InputError> {
    let records: Vec<Record> = serde_json::from_str(payload)?;

    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !seen.insert(record.id()) {
            return Err(InputError::DuplicateId {
                index,
                id: record.id().clone(),
            });
        }
    }
    Ok(records)
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: [`FileSource`] (must exist)
/// 2. If stdin is piped: [`StdinSource`]
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist, and
/// `InputError::NoInput` if no file is given and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
