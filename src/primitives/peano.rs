//! Peano numbers used as compile-time indices.

use core::marker::PhantomData;

/// Peano number trait
pub trait Peano: 'static {
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug)]
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Generate D0..D64 using proc-macro
macros::peano!(64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_count_up() {
        assert_eq!(D0::VALUE, 0);
        assert_eq!(D1::VALUE, 1);
        assert_eq!(D16::VALUE, 16);
        assert_eq!(D64::VALUE, 64);
    }
}
