// Common utilities shared by the derive implementations
//
// This module contains:
// - parse_utils: `#[identities(...)]` attribute parsing

mod parse_utils;

pub use parse_utils::*;
