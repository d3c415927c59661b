//!
//! The `solc --standard-json` input source representation.
//!

use serde::Deserialize;

///
/// The `solc --standard-json` input source representation.
///
#[derive(Debug, Deserialize)]
pub struct Source {
    /// The source code file content.
    pub content: String,
}

