//!
//! The Solidity compiler input formats embedded into verification records.
//!

pub mod standard_json;
