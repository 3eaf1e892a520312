//! The [`Owned`] wrapper: exclusive, scope-bound ownership of a raw resource handle,
//! paired with a type-level deleter.

use std::marker::PhantomData;

use crate::candidate::Candidate;

/// A release function for handles of type `*mut Resource`, bound at the type level.
///
/// Implementors are zero-sized marker types, so the deleter is part of an [`Owned`]
/// wrapper's *type*: every instance of `Owned<Resource, Del>` releases through the
/// same `Del`, and the wrapper stores nothing besides the handle itself.
///
/// ```
/// use eclectic::Deleter;
///
/// struct FreeBoxed;
///
/// impl Deleter<i32> for FreeBoxed {
///     fn release(handle: *mut i32) {
///         // Safety contract between allocator and deleter: this handle came from
///         // `Box::into_raw`.
///         drop(unsafe { Box::from_raw(handle) });
///     }
/// }
/// ```
pub trait Deleter<Resource> {
    /// Release one handle. Called exactly once per handle, never with null.
    fn release(handle: *mut Resource);
}

/// Sole owner of one raw resource handle, released through `Del` when dropped.
///
/// The wrapper acquires its handle exactly once, during construction, either from a
/// plain allocator ([`Owned::with`]) or from a selector resolved by return type (the
/// [`acquire!`](crate::acquire!) macro), and invokes `Del::release` on it exactly
/// once, when the wrapper goes out of scope. A null handle counts as "nothing was
/// produced" and is not released.
///
/// Ownership is exclusive: `Owned` is not `Clone`. Moving the wrapper transfers the
/// release obligation to the destination and suppresses it at the source, as with any
/// Rust move. There is no operation to release early or to detach the handle.
///
/// ```
/// use eclectic::{Deleter, Owned};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// static RELEASED: AtomicUsize = AtomicUsize::new(0);
///
/// fn alloc_boxed(value: i32) -> *mut i32 {
///     Box::into_raw(Box::new(value))
/// }
///
/// struct FreeBoxed;
///
/// impl Deleter<i32> for FreeBoxed {
///     fn release(handle: *mut i32) {
///         drop(unsafe { Box::from_raw(handle) });
///         RELEASED.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// {
///     let _owned: Owned<i32, FreeBoxed> = Owned::with(alloc_boxed, (7,));
/// } // dropped here
/// assert_eq!(RELEASED.load(Ordering::SeqCst), 1);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Owned<Resource, Del: Deleter<Resource>> {
    handle: *mut Resource,
    #[derivative(Debug = "ignore")]
    deleter: PhantomData<Del>,
}

impl<Resource, Del: Deleter<Resource>> Owned<Resource, Del> {
    /// Acquire a handle by invoking `alloc` once with the given argument tuple.
    ///
    /// The allocator must be invocable with `args` and must return exactly
    /// `*mut Resource`; anything else fails to compile, the same way an unresolvable
    /// overload does.
    pub fn with<Alloc, Args>(alloc: Alloc, args: Args) -> Self
    where
        Alloc: Candidate<Args, Output = *mut Resource>,
    {
        Self::from_raw(alloc.call(args))
    }

    /// Take ownership of an already-acquired handle.
    ///
    /// This is the primitive both construction paths lower to. The handle is assumed
    /// to be release-able through `Del`; passing a handle from some other source is
    /// a contract violation between the caller's allocator and deleter, not something
    /// this type can check.
    pub fn from_raw(handle: *mut Resource) -> Self {
        Owned {
            handle,
            deleter: PhantomData,
        }
    }
}

impl<Resource, Del: Deleter<Resource>> Drop for Owned<Resource, Del> {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            Del::release(self.handle);
        }
    }
}
