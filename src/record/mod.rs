//!
//! The explorer verification record.
//!

pub mod contract;
pub mod entry;
pub mod error;
pub mod source_code;

use serde::Deserialize;

use self::entry::Entry;
use self::error::SchemaViolation;

///
/// The explorer `getsourcecode` response, stored as one record file per contract.
///
/// The fields are kept untyped, so that a shape mismatch is reported as a schema violation
/// instead of a JSON parsing error.
///
#[derive(Debug, Deserialize)]
pub struct Record {
    /// The response status. `"1"` on success.
    #[serde(default)]
    pub status: serde_json::Value,
    /// The response message. `"OK"` on success.
    #[serde(default)]
    pub message: serde_json::Value,
    /// The response payload.
    #[serde(default)]
    pub result: serde_json::Value,
}

impl Record {
    /// The successful response status.
    pub const STATUS_OK: &'static str = "1";

    /// The successful response message.
    pub const MESSAGE_OK: &'static str = "OK";

    ///
    /// Validates the response envelope and extracts its single result entry.
    ///
    pub fn try_into_entry(self) -> Result<Entry, SchemaViolation> {
        if self.status.as_str() != Some(Self::STATUS_OK) {
            return Err(SchemaViolation::Status(self.status.to_string()));
        }
        if self.message.as_str() != Some(Self::MESSAGE_OK) {
            return Err(SchemaViolation::Message(self.message.to_string()));
        }

        let mut results = match self.result {
            serde_json::Value::Array(results) => results,
            serde_json::Value::Null => {
                return Err(SchemaViolation::MalformedResult(
                    "the field is missing".to_owned(),
                ))
            }
            other => {
                return Err(SchemaViolation::MalformedResult(format!(
                    "expected an array, found `{}`",
                    other
                )))
            }
        };
        if results.len() != 1 {
            return Err(SchemaViolation::ResultCount(results.len()));
        }

        serde_json::from_value(results.remove(0))
            .map_err(|error| SchemaViolation::MalformedResult(error.to_string()))
    }
}
