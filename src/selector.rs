//! The [`Overloads`] selector: a fixed, ordered, non-empty set of candidate callables
//! behind a single call-style interface.

use crate::list::{HasLength, NonEmpty, Select, Tuple};
use crate::resolve::{Probe, ProbeFor};
use crate::unary::{Unary, Z};

/// A selector over a fixed, ordered set of candidate callables.
///
/// An `Overloads` value holds its candidates in the inductive list `L`, in the order
/// they were supplied; that order is the search order, and it never changes. The list
/// must be non-empty: `Overloads<()>` is not a type that can be formed, so a
/// zero-candidate selector is rejected during type checking.
///
/// Invoking a selector picks a candidate purely from the static types at the call
/// site, so invocation goes through the [`dispatch!`](crate::dispatch!) and
/// [`dispatch_for!`](crate::dispatch_for!) macros, which expand to a [`probe`] of the
/// argument tuple followed by a [`resolve`](crate::resolve::Resolve::resolve) against
/// the candidate list. The selected call compiles to a direct invocation of the chosen
/// candidate; nothing is scanned, branched on, or looked up at run time.
///
/// ```
/// use eclectic::prelude::*;
///
/// fn short(x: i8) -> &'static str {
///     let _ = x;
///     "i8"
/// }
///
/// fn wide(x: i64) -> &'static str {
///     let _ = x;
///     "i64"
/// }
///
/// let describe = overloads![short, wide];
/// assert_eq!(dispatch!(describe, 1i8), "i8");
/// assert_eq!(dispatch!(describe, 1i64), "i64");
/// ```
///
/// [`probe`]: Overloads::probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overloads<L: NonEmpty> {
    candidates: L,
}

impl<L: NonEmpty> Overloads<L> {
    /// Construct a selector from a flat tuple of one or more candidates.
    ///
    /// The tuple is restructured into the inductive candidate list `L`; supplying the
    /// empty tuple fails to compile, because its list `()` is not [`NonEmpty`].
    pub fn new<T>(candidates: T) -> Self
    where
        T: Tuple<AsList = L>,
    {
        Overloads {
            candidates: candidates.into_list(),
        }
    }

    /// Construct a selector directly from an inductive candidate list.
    pub fn from_list(candidates: L) -> Self {
        Overloads { candidates }
    }

    /// Borrow the candidate list.
    ///
    /// This is the list value that a probe's
    /// [`resolve`](crate::resolve::Resolve::resolve) selects out of; the macros pass
    /// it for you.
    pub fn candidates(&self) -> &L {
        &self.candidates
    }

    /// The number of candidates in this selector.
    pub fn arity(&self) -> usize
    where
        L: HasLength,
    {
        <L::Length as Unary>::VALUE
    }

    /// Borrow the candidate at position `N`.
    pub fn candidate<N: Unary>(&self) -> &L::Selected
    where
        L: Select<N>,
    {
        self.candidates.select()
    }

    /// Begin a call-by-arguments scan for the argument tuple type `Args`.
    ///
    /// The returned probe is a zero-sized cursor at position zero of the candidate
    /// list; the argument reference only pins down `Args`, which must be fully
    /// concrete for the scan to proceed.
    pub fn probe<Args>(&self, _args: &Args) -> Probe<Args, Z, L> {
        Probe::CURSOR
    }

    /// Begin a call-by-return-type scan: like [`probe`](Overloads::probe), but a
    /// candidate only matches if its declared return type is exactly `R`.
    pub fn probe_for<R, Args>(&self, _args: &Args) -> ProbeFor<R, Args, Z, L> {
        ProbeFor::CURSOR
    }
}
