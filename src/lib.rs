/*!
> **eclectic (adjective):** deriving ideas, style, or taste from a broad and diverse
> range of sources.
>
> **eclectic (crate):** compile-time overload resolution over a broad and diverse
> set of functions.

Rust has no function overloading: every callable has one signature, and a call site
names exactly one callable. This crate provides the missing construct as a library:
a *selector* value built from several candidate functions, invoked with one call
syntax, where the compiler picks the candidate that fits the argument types (or, for
the variant that needs it, the required return type). Such a selector:

- resolves **entirely at compile time**: the chosen candidate is fixed before
  anything runs, and the call compiles to a direct invocation with **zero run-time
  branching**;
- scans candidates **in the order given** and commits to the **first** that is
  applicable (true ambiguity between candidates is *not* detected; the earlier one
  silently wins, a documented limitation);
- rejects unresolvable calls **at build time**: an argument list no candidate
  accepts, a return type no candidate declares, or an empty candidate set are all
  compile errors, never run-time failures.

On top of the selector sits [`Owned`], a scope-bound owner for raw resource handles:
it acquires a handle exactly once at construction, from a plain allocator or from a
selector resolved by the handle's type, and releases it through a type-level
[`Deleter`] exactly once on drop.

## Quick reference

The [`prelude`] module exports everything needed to use the crate:
`use eclectic::prelude::*;`.

| Operation | Surface | Example |
| :-------- | :------ | :------ |
| Construct a selector from N ≥ 1 candidates | [`overloads!`] (or [`Overloads::new`]) | `overloads![f, g, h]` |
| Invoke, selecting by argument types | [`dispatch!`] | `dispatch!(sel, ptr, len)` |
| Invoke, selecting by return type too | [`dispatch_for!`] | `dispatch_for!(*mut i32; sel, len)` |
| Own a handle from a plain allocator | [`Owned::with`] | `Owned::<i32, Free>::with(alloc, (len,))` |
| Own a handle from a selector | [`acquire!`] | `acquire!(i32, Free; sel, len)` |

## Example

```
use eclectic::prelude::*;

fn square_s8(val: *const i8, len: usize) -> i32 {
    let _ = (val, len);
    1
}

fn square_s32(val: *const i32, len: usize) -> i32 {
    let _ = (val, len);
    4
}

fn square_f32(val: *const f32) -> i32 {
    let _ = val;
    8
}

let bytes = [0i8; 1];
let words = [0i32; 1];
let floats = [0f32; 1];

// One callable, three signatures.
let square = overloads![square_s8, square_s32, square_f32];
assert_eq!(dispatch!(square, bytes.as_ptr(), bytes.len()), 1);
assert_eq!(dispatch!(square, words.as_ptr(), words.len()), 4);
assert_eq!(dispatch!(square, floats.as_ptr()), 8);
```

## How resolution works

A selector stores its candidates in an inductive type-level list (see [`list`]).
Invocation expands to a zero-sized *probe* of the argument tuple type, aimed at
position zero of that list; the probe's [`Deref`](std::ops::Deref) chain steps it
down the list one position at a time, and method resolution stops at the first
position whose candidate satisfies the [`Candidate`](candidate::Candidate)
applicability bound (see [`resolve`]). Applicability is ordinary Rust call
applicability: the candidate's [`Fn`] parameter types match the argument types
exactly, with no adjustment beyond subtyping.

Because the scan runs inside method resolution, it needs every type concrete at the
call site, which is why invocation is a macro rather than a generic method. The
tutorial walks through the consequences, including the one sharp edge: resolution is
first-match-wins, **not** best-match.

## What failure looks like

Everything this crate checks, it checks at build time:

- `overloads![]` does not expand, and `Overloads::new(())` fails the
  [`NonEmpty`](list::NonEmpty) bound;
- a `dispatch!`/`dispatch_for!` no candidate can satisfy reports that the probe has
  no `resolve` method, listing the candidate bounds that failed along the scan;
- an [`Owned::with`] allocator of the wrong shape fails its
  [`Candidate`](candidate::Candidate) bound.

There is no run-time error path anywhere in the crate.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

#[macro_use]
extern crate derivative;

pub mod candidate;
pub mod list;
pub mod resolve;
pub mod tutorial;
pub mod unary;

mod owned;
mod selector;

mod acquire_macro;
mod dispatch_macro;
mod overloads_macro;

pub use owned::{Deleter, Owned};
pub use selector::Overloads;

/// The prelude module for quickly getting started with this crate.
///
/// This module is designed to be imported as `use eclectic::prelude::*;`, which
/// brings into scope the selector and wrapper types, the traits their signatures
/// mention, and the four macros.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::candidate::Candidate;
    #[doc(no_inline)]
    pub use crate::list::NonEmpty;
    #[doc(no_inline)]
    pub use crate::resolve::Resolve;
    #[doc(no_inline)]
    pub use crate::{acquire, dispatch, dispatch_for, overloads};
    #[doc(no_inline)]
    pub use crate::{Deleter, Overloads, Owned};
}

// Resolution-order tests enumerated by the build script; see build.rs.
#[cfg(test)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/resolution_tests.rs"));
}
