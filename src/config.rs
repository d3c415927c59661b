//!
//! The unpacker configuration.
//!

///
/// The unpacker configuration.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether to export the contract ABI into `<name>.abi`.
    pub export_abi: bool,
}

impl Config {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(export_abi: bool) -> Self {
        Self { export_abi }
    }
}
