//! Internal macro implementations: type generation that users never call by name.

pub mod digits;
pub mod peano;
