//! Runtime predicates over slices.
//!
//! Same definitions and base cases as the type-level traits, for values that are
//! only known at runtime.

use core::fmt::Debug;

use crate::error::SetError;

/// `value` equals some element of `seq`.
pub fn contains<I: PartialEq>(seq: &[I], value: &I) -> bool {
    match seq {
        [] => false,
        [head, tail @ ..] => head == value || contains(tail, value),
    }
}

/// No element of `seq` appears twice.
pub fn is_set<I: PartialEq>(seq: &[I]) -> bool {
    match seq {
        [] => true,
        [head, tail @ ..] => !contains(tail, head) && is_set(tail),
    }
}

/// Every adjacent pair satisfies `earlier <= later`.
pub fn is_everse_list<I: PartialOrd>(seq: &[I]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Every adjacent pair satisfies `earlier >= later`.
pub fn is_inverse_list<I: PartialOrd>(seq: &[I]) -> bool {
    seq.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Monotonic in either direction.
pub fn is_list<I: PartialOrd>(seq: &[I]) -> bool {
    is_everse_list(seq) || is_inverse_list(seq)
}

/// Like [`is_set`], reporting the first repeated pair.
pub fn ensure_set<I: PartialEq + Debug>(seq: &[I]) -> Result<(), SetError> {
    for (first, value) in seq.iter().enumerate() {
        if let Some(offset) = seq[first + 1..].iter().position(|other| other == value) {
            let second = first + 1 + offset;
            log::debug!("duplicate element {value:?} at positions {first} and {second}");
            return Err(SetError::DuplicateElement { first, second });
        }
    }
    Ok(())
}
