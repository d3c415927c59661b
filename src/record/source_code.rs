//!
//! The verification record source code.
//!

use std::collections::BTreeMap;

use crate::solc::standard_json::input::source::Source;
use crate::solc::standard_json::input::Input as StandardJsonInput;

///
/// The source code encoding, inferred from the leading characters.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `{{...}}`: the standard JSON input wrapped into an extra pair of braces.
    DoubleBraced,
    /// `{...}`: the file path to source map.
    Braced,
    /// Anything else: the single file source text.
    Plain,
}

impl Encoding {
    ///
    /// Infers the encoding of the `source_code`.
    ///
    pub fn detect(source_code: &str) -> Self {
        if source_code.starts_with("{{") {
            Self::DoubleBraced
        } else if source_code.starts_with('{') {
            Self::Braced
        } else {
            Self::Plain
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DoubleBraced => write!(f, "standard JSON"),
            Self::Braced => write!(f, "multi-file"),
            Self::Plain => write!(f, "single file"),
        }
    }
}

///
/// The decoded source code.
///
#[derive(Debug)]
pub enum SourceCode {
    /// The standard JSON input with the language and settings.
    StandardJson(StandardJsonInput),
    /// The file path to source map.
    Bundle(BTreeMap<String, Source>),
    /// The single file source text.
    Plain(String),
}

impl SourceCode {
    ///
    /// Decodes the `source_code` according to its encoding.
    ///
    pub fn decode(source_code: String) -> Result<Self, serde_json::Error> {
        match Encoding::detect(source_code.as_str()) {
            Encoding::DoubleBraced => {
                let mut characters = source_code.chars();
                characters.next();
                characters.next_back();
                let input = crate::lenient::from_str(characters.as_str())?;
                Ok(Self::StandardJson(input))
            }
            Encoding::Braced => {
                let sources = serde_json::from_str(source_code.as_str())?;
                Ok(Self::Bundle(sources))
            }
            Encoding::Plain => Ok(Self::Plain(source_code)),
        }
    }

    ///
    /// Returns the encoding the source code has been decoded from.
    ///
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::StandardJson(_) => Encoding::DoubleBraced,
            Self::Bundle(_) => Encoding::Braced,
            Self::Plain(_) => Encoding::Plain,
        }
    }

    ///
    /// Returns the embedded bundle file paths.
    ///
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::StandardJson(input) => input.sources.keys().map(String::as_str).collect(),
            Self::Bundle(sources) => sources.keys().map(String::as_str).collect(),
            Self::Plain(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Encoding;
    use super::SourceCode;

    #[test]
    fn ok_detect() {
        assert_eq!(Encoding::detect("{{\"language\": \"Solidity\"}}"), Encoding::DoubleBraced);
        assert_eq!(Encoding::detect("{\"A.sol\": {}}"), Encoding::Braced);
        assert_eq!(Encoding::detect("pragma solidity ^0.8.0;"), Encoding::Plain);
        assert_eq!(Encoding::detect(" {\"A.sol\": {}}"), Encoding::Plain);
    }

    #[test]
    fn ok_decode_double_braced() {
        let source_code = "{{\"language\":\"Solidity\",\"sources\":{\"A.sol\":{\"content\":\"contract A {\n}\"}},\"settings\":{\"optimizer\":{\"enabled\":false}}}}";

        match SourceCode::decode(source_code.to_owned()).expect("Valid source code") {
            SourceCode::StandardJson(input) => {
                assert_eq!(input.language, "Solidity");
                assert_eq!(input.sources["A.sol"].content, "contract A {\n}");
            }
            other => panic!("Unexpected source code: {:?}", other),
        }
    }

    #[test]
    fn ok_decode_braced() {
        let source_code = r#"{"A.sol":{"content":"contract A{}"},"lib/B.sol":{"content":"contract B{}"}}"#;

        let source_code = SourceCode::decode(source_code.to_owned()).expect("Valid source code");
        assert_eq!(source_code.encoding(), Encoding::Braced);
        assert_eq!(source_code.paths(), vec!["A.sol", "lib/B.sol"]);
    }

    #[test]
    fn ok_decode_plain() {
        let source_code = "pragma solidity ^0.8.0; contract C {}";

        match SourceCode::decode(source_code.to_owned()).expect("Valid source code") {
            SourceCode::Plain(text) => assert_eq!(text, source_code),
            other => panic!("Unexpected source code: {:?}", other),
        }
    }

    #[test]
    fn ok_decode_double_braced_empty_sources() {
        let source_code = "{{\"language\":\"Solidity\",\"sources\":{},\"settings\":{}}}";

        let source_code = SourceCode::decode(source_code.to_owned()).expect("Valid source code");
        assert_eq!(source_code.encoding(), Encoding::DoubleBraced);
        assert!(source_code.paths().is_empty());
    }

    #[test]
    fn error_braced_is_strict() {
        let source_code = "{\"A.sol\":{\"content\":\"contract A {\n}\"}}";
        assert!(SourceCode::decode(source_code.to_owned()).is_err());
    }

    #[test]
    fn error_double_braced_missing_language() {
        let source_code = "{{\"sources\":{},\"settings\":{}}}";
        assert!(SourceCode::decode(source_code.to_owned()).is_err());
    }

    #[test]
    fn error_double_braced_truncated() {
        let source_code = "{{\"language\":\"Solidity\",\"sources\":{";
        assert!(SourceCode::decode(source_code.to_owned()).is_err());
    }
}
