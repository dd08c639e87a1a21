//! Runtime errors.
//!
//! Type-level misuse is a compile error; these cover the runtime entry points
//! (`try_get`, `from_values`, `ensure_set`).

use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetError {
    /// Runtime index past the last element.
    #[display(fmt = "index {} is out of range for a set of size {}", index, size)]
    IndexOutOfRange { index: usize, size: usize },

    /// The same value at two positions.
    #[display(fmt = "duplicate element at positions {} and {}", first, second)]
    DuplicateElement { first: usize, second: usize },

    /// Runtime values that do not describe the set type.
    #[display(fmt = "values do not match the elements of the set")]
    Mismatch,
}

impl core::error::Error for SetError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SetError::IndexOutOfRange { index: 3, size: 2 };
        assert_eq!(err.to_string(), "index 3 is out of range for a set of size 2");
        let err = SetError::DuplicateElement { first: 0, second: 2 };
        assert_eq!(err.to_string(), "duplicate element at positions 0 and 2");
    }
}
