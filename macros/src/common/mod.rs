// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: literal and kind parsing helpers

mod parse_utils;

pub use parse_utils::*;
