//!
//! The unpacker error.
//!

use std::path::PathBuf;

use crate::record::error::SchemaViolation;

///
/// The unpacker error.
///
/// Every variant carries the path of the record or the output directory it relates to.
///
#[derive(Debug)]
pub enum Error {
    /// The file system error.
    FileSystem(PathBuf, std::io::Error),
    /// The record is not a valid JSON document.
    Record(PathBuf, serde_json::Error),
    /// The record does not have the verification record shape.
    Schema(PathBuf, SchemaViolation),
    /// The embedded source bundle is not a valid JSON document.
    Bundle(PathBuf, serde_json::Error),
    /// The embedded ABI is not a valid JSON document.
    Abi(PathBuf, serde_json::Error),
    /// The bundle file path points outside of the output directory.
    UnsafePath(PathBuf, String),
}

impl Error {
    ///
    /// Whether the error is a JSON parsing error of the record or its embedded documents.
    ///
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Record(..) | Self::Bundle(..) | Self::Abi(..))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileSystem(path, error) => {
                write!(f, "{}: file system error: {}", path.display(), error)
            }
            Self::Record(path, error) => {
                write!(f, "{}: record parsing error: {}", path.display(), error)
            }
            Self::Schema(path, violation) => {
                write!(f, "{}: invalid record: {}", path.display(), violation)
            }
            Self::Bundle(path, error) => {
                write!(f, "{}: source bundle parsing error: {}", path.display(), error)
            }
            Self::Abi(path, error) => {
                write!(f, "{}: ABI parsing error: {}", path.display(), error)
            }
            Self::UnsafePath(path, bundle_path) => write!(
                f,
                "{}: bundle path `{}` escapes the output directory",
                path.display(),
                bundle_path
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem(_, error) => Some(error),
            Self::Record(_, error) | Self::Bundle(_, error) | Self::Abi(_, error) => Some(error),
            Self::Schema(_, violation) => Some(violation),
            Self::UnsafePath(..) => None,
        }
    }
}
