//!
//! The contract ABI export.
//!

use serde::Serialize;

/// The ABI file indentation.
pub const INDENT: &[u8] = b"    ";

///
/// Parses the ABI JSON string and prints it with sorted keys and a four-space indent.
///
pub fn prettify(abi: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(abi)?;

    let mut buffer = Vec::with_capacity(abi.len() * 2);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}
