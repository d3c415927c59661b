//!
//! The validated contract data.
//!

use crate::record::entry::Entry;
use crate::record::error::SchemaViolation;

///
/// The validated contract data.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    /// The non-empty source code.
    pub source_code: String,
    /// The non-empty contract name.
    pub name: Option<String>,
    /// The compiler version.
    pub compiler_version: Option<String>,
    /// The raw ABI JSON.
    pub abi: Option<String>,
}

impl Contract {
    /// The compiler version prefix of Vyper contracts.
    pub const VYPER_PREFIX: &'static str = "vyper";

    /// The Solidity source file extension.
    pub const EXTENSION_SOLIDITY: &'static str = "sol";

    /// The Vyper source file extension.
    pub const EXTENSION_VYPER: &'static str = "vy";

    ///
    /// Returns the single-file source extension inferred from the compiler version.
    ///
    pub fn extension(&self) -> &'static str {
        match self.compiler_version.as_deref() {
            Some(version) if version.starts_with(Self::VYPER_PREFIX) => Self::EXTENSION_VYPER,
            _ => Self::EXTENSION_SOLIDITY,
        }
    }
}

impl TryFrom<Entry> for Contract {
    type Error = SchemaViolation;

    fn try_from(entry: Entry) -> Result<Self, Self::Error> {
        let source_code = match entry.source_code {
            Some(source_code) if !source_code.is_empty() => source_code,
            _ => return Err(SchemaViolation::EmptySourceCode),
        };

        Ok(Self {
            source_code,
            name: entry.contract_name.filter(|name| !name.is_empty()),
            compiler_version: entry.compiler_version,
            abi: entry.abi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Contract;
    use crate::record::entry::Entry;
    use crate::record::error::SchemaViolation;

    fn entry(source_code: Option<&str>, compiler_version: Option<&str>) -> Entry {
        Entry {
            source_code: source_code.map(str::to_owned),
            contract_name: Some(String::new()),
            compiler_version: compiler_version.map(str::to_owned),
            abi: None,
        }
    }

    #[test]
    fn ok_solidity_extension() {
        let contract = Contract::try_from(entry(
            Some("contract C {}"),
            Some("v0.8.19+commit.7dd6d404"),
        ))
        .expect("Valid entry");
        assert_eq!(contract.extension(), "sol");
    }

    #[test]
    fn ok_vyper_extension() {
        let contract = Contract::try_from(entry(
            Some("@external\ndef f(): pass"),
            Some("vyper:0.3.1"),
        ))
        .expect("Valid entry");
        assert_eq!(contract.extension(), "vy");
    }

    #[test]
    fn ok_empty_name_is_absent() {
        let contract =
            Contract::try_from(entry(Some("contract C {}"), None)).expect("Valid entry");
        assert_eq!(contract.name, None);
        assert_eq!(contract.extension(), "sol");
    }

    #[test]
    fn error_missing_source_code() {
        assert_eq!(
            Contract::try_from(entry(None, None)),
            Err(SchemaViolation::EmptySourceCode)
        );
    }

    #[test]
    fn error_empty_source_code() {
        assert_eq!(
            Contract::try_from(entry(Some(""), None)),
            Err(SchemaViolation::EmptySourceCode)
        );
    }
}
