//!
//! The explorer verification record result entry.
//!

use serde::Deserialize;

///
/// The explorer verification record result entry.
///
/// The explorer returns many more fields (optimizer runs, license, proxy data), which are ignored.
///
#[derive(Debug, Deserialize)]
pub struct Entry {
    /// The source code in one of the supported encodings.
    #[serde(rename = "SourceCode", default)]
    pub source_code: Option<String>,
    /// The main contract name.
    #[serde(rename = "ContractName", default)]
    pub contract_name: Option<String>,
    /// The compiler version, e.g. `v0.8.19+commit.7dd6d404` or `vyper:0.3.1`.
    #[serde(rename = "CompilerVersion", default)]
    pub compiler_version: Option<String>,
    /// The contract ABI as a JSON string.
    #[serde(rename = "ABI", default)]
    pub abi: Option<String>,
}
