//!
//! The record unpacking outcome.
//!

use std::path::PathBuf;

use crate::record::source_code::Encoding;

///
/// The record unpacking outcome.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The source tree has been written.
    Unpacked {
        /// The output directory.
        directory: PathBuf,
        /// The source code encoding.
        encoding: Encoding,
        /// The number of files written.
        files: usize,
    },
    /// The record has been skipped.
    Skipped(SkipReason),
}

///
/// The reason a record has been skipped.
///
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The file name does not have the `.json` extension.
    NotARecord(PathBuf),
    /// The output directory already exists.
    AlreadyExists(PathBuf),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotARecord(path) => {
                write!(f, "{} does not seem to be a JSON file", path.display())
            }
            Self::AlreadyExists(path) => write!(f, "{} already exists", path.display()),
        }
    }
}
