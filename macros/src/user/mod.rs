//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `set!` | type position | Build a duplicate-free set type |
//! | `seq!` | type position | Build a raw sequence type |
//! | `bag!` | type position | Build a bag type |
//! | `elem!` | type position | Build a single element type |

mod set_literal;

pub use set_literal::{expand_bag, expand_elem, expand_seq, expand_set};
