//! Shared error type and file-opening helpers.
//!
//! All inputs are UTF-8 text read line by line. Failures carry the offending
//! path so the CLI can report it without extra bookkeeping.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Errors returned by the report-filtering and contig-extraction steps.
#[derive(thiserror::Error, Debug)]
pub enum BlastnExtractError {
    /// Returned when the report or contig path does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },
    /// Returned when an input line is not valid UTF-8 text.
    #[error("{}: not valid UTF-8 text", .path.display())]
    Decode { path: PathBuf },
    /// Returned when the output file cannot be created, written, or flushed.
    #[error("cannot write {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
    /// Any other read failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Open an input file for buffered line reading, mapping a missing path to
/// [`BlastnExtractError::InputNotFound`].
pub(crate) fn open_input(path: &Path) -> Result<BufReader<File>, BlastnExtractError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(BlastnExtractError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(BlastnExtractError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Classify a per-line read failure: undecodable bytes surface as
/// [`BlastnExtractError::Decode`], everything else as plain I/O.
pub(crate) fn read_error(path: &Path, err: io::Error) -> BlastnExtractError {
    if err.kind() == io::ErrorKind::InvalidData {
        BlastnExtractError::Decode {
            path: path.to_path_buf(),
        }
    } else {
        BlastnExtractError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
