//!
//! The `solc --standard-json` input representation.
//!

pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;

use self::source::Source;

///
/// The `solc --standard-json` input representation.
///
/// The explorers store it verbatim for contracts verified with the standard JSON input.
///
#[derive(Debug, Deserialize)]
pub struct Input {
    /// The input language, e.g. `Solidity` or `Vyper`.
    pub language: String,
    /// The input source code files map.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings, kept as is.
    pub settings: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::Input;

    #[test]
    fn ok_extra_source_fields_ignored() {
        let input: Input = serde_json::from_str(
            r#"{
                "language": "Solidity",
                "sources": {
                    "contracts/A.sol": {
                        "content": "contract A {}",
                        "keccak256": "0x00",
                        "urls": []
                    }
                },
                "settings": { "optimizer": { "enabled": true, "runs": 200 } }
            }"#,
        )
        .expect("Valid input");

        assert_eq!(input.language, "Solidity");
        assert_eq!(input.sources["contracts/A.sol"].content, "contract A {}");
        assert_eq!(input.settings["optimizer"]["runs"], 200);
    }

    #[test]
    fn error_missing_settings() {
        let result = serde_json::from_str::<Input>(
            r#"{ "language": "Solidity", "sources": {} }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn error_missing_sources() {
        let result = serde_json::from_str::<Input>(
            r#"{ "language": "Solidity", "settings": {} }"#,
        );
        assert!(result.is_err());
    }
}
