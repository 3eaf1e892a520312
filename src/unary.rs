//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! This crate uses unary numbers to name positions in a candidate list: the
//! index of the candidate chosen by overload resolution is reported as the
//! type-level number [`Resolve::Index`](crate::resolve::Resolve::Index).

/// The number zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// All unary numbers can be converted to their value-level equivalent `usize`.
pub trait Unary: sealed::Sealed {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

mod sealed {
    use super::*;
    pub trait Sealed {}
    impl Sealed for Z {}
    impl<N: Sealed> Sealed for S<N> {}
}

pub mod types {
    //! Predefined type synonyms for small type-level numbers, enough to name
    //! every position in a full-width candidate list.
    use super::*;

    pub type _0 = Z;
    pub type _1 = S<_0>;
    pub type _2 = S<_1>;
    pub type _3 = S<_2>;
    pub type _4 = S<_3>;
    pub type _5 = S<_4>;
    pub type _6 = S<_5>;
    pub type _7 = S<_6>;
    pub type _8 = S<_7>;
    pub type _9 = S<_8>;
    pub type _10 = S<_9>;
    pub type _11 = S<_10>;
    pub type _12 = S<_11>;
}

#[cfg(test)]
mod tests {
    use super::types::*;
    use super::*;

    #[test]
    fn unary_values_count_up() {
        assert_eq!(<_0 as Unary>::VALUE, 0);
        assert_eq!(<_1 as Unary>::VALUE, 1);
        assert_eq!(<_12 as Unary>::VALUE, 12);
    }
}
