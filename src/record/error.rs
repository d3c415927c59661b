//!
//! The verification record schema violation.
//!

///
/// The verification record schema violation.
///
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// The `status` field is missing or is not `"1"`.
    Status(String),
    /// The `message` field is missing or is not `"OK"`.
    Message(String),
    /// The `result` field is not an array.
    MalformedResult(String),
    /// The `result` array does not contain exactly one entry.
    ResultCount(usize),
    /// The `SourceCode` field is missing or empty.
    EmptySourceCode,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(found) => write!(f, "expected status `\"1\"`, found `{}`", found),
            Self::Message(found) => write!(f, "expected message `\"OK\"`, found `{}`", found),
            Self::MalformedResult(reason) => write!(f, "malformed result: {}", reason),
            Self::ResultCount(found) => {
                write!(f, "expected exactly one result entry, found {}", found)
            }
            Self::EmptySourceCode => write!(f, "the source code is missing or empty"),
        }
    }
}

impl std::error::Error for SchemaViolation {}
