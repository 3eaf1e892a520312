//! The resolution engine: probe cursors and the [`Resolve`] trait.
//!
//! Overload resolution is an ordered scan over the candidate list, performed entirely
//! during type checking. The scan is driven by Rust's method resolution: a zero-sized
//! cursor ([`Probe`] or [`ProbeFor`]) starts at position [`Z`](crate::unary::Z) of the
//! list, and each step of its [`Deref`] chain advances it one position. Calling
//! [`resolve`](Resolve::resolve) on a cursor makes the compiler walk that chain and
//! commit to the *first* cursor whose head candidate satisfies the [`Candidate`]
//! bound, which is precisely "scan candidates in stored order and pick the first that
//! is invocable with these argument types". Later candidates that would also match are
//! never considered; true ambiguity is not detected.
//!
//! Because the chain is walked by method resolution, every type involved must be
//! concrete at the call site. The [`dispatch!`](crate::dispatch!) and
//! [`dispatch_for!`](crate::dispatch_for!) macros arrange exactly that, and are the
//! intended way to invoke a selector.
//!
//! When no candidate matches, the chain bottoms out at a cursor over the empty list,
//! which implements neither [`Resolve`] nor [`Deref`]: the program fails to compile
//! with an E0599 naming the probe's argument tuple and the `Candidate` bounds each
//! position failed to satisfy. No failure is ever deferred to run time.

use std::marker::PhantomData;
use std::ops::Deref;

use crate::candidate::Candidate;
use crate::list::Select;
use crate::unary::{S, Unary};

/// A call-by-arguments probe: a cursor at position `N` of the candidate list `L`,
/// scanning for a candidate invocable with the argument tuple `Args`.
///
/// A probe is pure type information and holds no data. Probes are created at position
/// [`Z`](crate::unary::Z) by [`Overloads::probe`](crate::Overloads::probe) and advanced
/// by dereferencing.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Probe<Args, N, L> {
    cursor: PhantomData<(Args, N, L)>,
}

/// A call-by-return-type probe: like [`Probe`], but a candidate at the cursor only
/// matches if it is invocable with `Args` *and* its declared return type is exactly
/// `R`. No conversion is applied to the return type.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct ProbeFor<R, Args, N, L> {
    cursor: PhantomData<(R, Args, N, L)>,
}

impl<Args, N, L> Probe<Args, N, L> {
    pub(crate) const CURSOR: Self = Probe {
        cursor: PhantomData,
    };
}

impl<R, Args, N, L> ProbeFor<R, Args, N, L> {
    pub(crate) const CURSOR: Self = ProbeFor {
        cursor: PhantomData,
    };
}

/// Advance a call-by-arguments probe one position down the candidate list.
///
/// Method resolution only takes this step when the candidate under the cursor does
/// not satisfy `Candidate<Args>`, so the first match always wins.
impl<Args, N, T, Ts> Deref for Probe<Args, N, (T, Ts)> {
    type Target = Probe<Args, S<N>, Ts>;

    fn deref(&self) -> &Self::Target {
        // A probe is zero-sized, so the advanced cursor is promoted to a
        // `'static` constant.
        &Probe {
            cursor: PhantomData,
        }
    }
}

/// Advance a call-by-return-type probe one position down the candidate list.
impl<R, Args, N, T, Ts> Deref for ProbeFor<R, Args, N, (T, Ts)> {
    type Target = ProbeFor<R, Args, S<N>, Ts>;

    fn deref(&self) -> &Self::Target {
        &ProbeFor {
            cursor: PhantomData,
        }
    }
}

/// The outcome of a successful scan: implemented by a probe cursor exactly when its
/// head candidate matches.
///
/// This is the crate's verification result, expressed as a trait: whether a given
/// probe implements `Resolve<Args>` is the "found" flag (usable as a bound), and
/// [`Index`](Resolve::Index) is the selected position (usable as an index through
/// [`Select`], or read at the value level via [`Unary::VALUE`]).
pub trait Resolve<Args> {
    /// Position of the selected candidate in the list the probe was created from, as
    /// a type-level number.
    type Index: Unary;

    /// The selected candidate's declared return type.
    type Output;

    /// The selected position as a plain `usize` (mainly useful in tests and
    /// diagnostics; resolution itself never consults it).
    fn index(&self) -> usize {
        <Self::Index as Unary>::VALUE
    }

    /// Invoke the selected candidate out of the full candidate list `L`, forwarding
    /// the argument tuple and returning the candidate's result.
    ///
    /// `candidates` must be the list the probe was created from; the selector's
    /// entry points guarantee this pairing.
    fn resolve<L, C>(&self, candidates: &L, args: Args) -> Self::Output
    where
        L: Select<Self::Index, Selected = C>,
        C: Candidate<Args, Output = Self::Output>;
}

impl<Args, N, T, Ts> Resolve<Args> for Probe<Args, N, (T, Ts)>
where
    N: Unary,
    T: Candidate<Args>,
{
    type Index = N;
    type Output = T::Output;

    fn resolve<L, C>(&self, candidates: &L, args: Args) -> Self::Output
    where
        L: Select<Self::Index, Selected = C>,
        C: Candidate<Args, Output = Self::Output>,
    {
        candidates.select().call(args)
    }
}

impl<R, Args, N, T, Ts> Resolve<Args> for ProbeFor<R, Args, N, (T, Ts)>
where
    N: Unary,
    T: Candidate<Args, Output = R>,
{
    type Index = N;
    type Output = R;

    fn resolve<L, C>(&self, candidates: &L, args: Args) -> Self::Output
    where
        L: Select<Self::Index, Selected = C>,
        C: Candidate<Args, Output = Self::Output>,
    {
        candidates.select().call(args)
    }
}
