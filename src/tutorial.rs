/*! A tutorial-style tour of the crate (nothing is exported from this module).

# Building a selector

A selector is built from one or more candidate functions with the
[`overloads!`](crate::overloads!) macro (or [`Overloads::new`](crate::Overloads::new)
on a tuple). Candidates keep the order you give them, forever:

```
use eclectic::prelude::*;

fn from_bytes(bytes: &[u8]) -> usize {
    bytes.len()
}

fn from_pair(hi: u8, lo: u8) -> usize {
    usize::from(hi) * 256 + usize::from(lo)
}

let width = overloads![from_bytes, from_pair];
assert_eq!(width.arity(), 2);
```

Anything callable through an [`Fn`] trait can be a candidate, whether a plain function
(each its own zero-sized type), an `fn` pointer, or a closure, with up to twelve
parameters. The intended domain is free functions, per the examples throughout.

# Dispatching on argument types

[`dispatch!`](crate::dispatch!) invokes the selector, forwarding to the first
candidate whose parameter types accept the supplied arguments:

```
# use eclectic::prelude::*;
# fn from_bytes(bytes: &[u8]) -> usize { bytes.len() }
# fn from_pair(hi: u8, lo: u8) -> usize { usize::from(hi) * 256 + usize::from(lo) }
# let width = overloads![from_bytes, from_pair];
assert_eq!(dispatch!(width, &[1u8, 2, 3][..]), 3);
assert_eq!(dispatch!(width, 1u8, 0u8), 256);
```

The match is decided purely from the static types of the arguments, during type
checking. By the time the program runs, each `dispatch!` above has already become a
direct call of `from_bytes` or `from_pair`; the selector is never searched at run
time.

Two consequences of "static types" are worth internalizing:

- applicability is *exact*: there are no conversions between candidate signatures,
  so a `u16` argument does not reach a candidate declared over `u8`;
- an unsuffixed integer literal is still an inference variable when the scan runs,
  and will settle on the first candidate that accepts *any* integer type. When
  candidates differ only in integer width, suffix the literal.

# Dispatching on return type

When several candidates accept the same arguments, the argument types alone cannot
distinguish them. [`dispatch_for!`](crate::dispatch_for!) adds a second filter: the
candidate's declared return type must *equal* the requested type. The classic case is
a family of allocators that all take a size:

```
use eclectic::prelude::*;

fn alloc_s8(len: usize) -> *mut i8 {
    Box::into_raw(vec![0i8; len].into_boxed_slice()) as *mut i8
}

fn alloc_s32(len: usize) -> *mut i32 {
    Box::into_raw(vec![0i32; len].into_boxed_slice()) as *mut i32
}

let alloc = overloads![alloc_s8, alloc_s32];

// `(usize,)` matches both; only the return type distinguishes them.
let words: *mut i32 = dispatch_for!(*mut i32; alloc, 4usize);
# drop(unsafe { Vec::from_raw_parts(words, 4, 4) });
```

# First match wins, and nothing else is checked

Resolution is a scan, not a ranking. If two candidates both accept the argument
list, the one with the smaller index wins and the other is never examined; the crate
deliberately does not detect this situation:

```
use eclectic::prelude::*;

fn preferred(x: i32) -> &'static str {
    let _ = x;
    "preferred"
}

fn shadowed(x: i32) -> &'static str {
    let _ = x;
    "shadowed"
}

let select = overloads![preferred, shadowed];
assert_eq!(dispatch!(select, 1i32), "preferred");

// Swapping the order swaps the winner: order is the only tie-break.
let select = overloads![shadowed, preferred];
assert_eq!(dispatch!(select, 1i32), "shadowed");
```

If you need a shadowed candidate, reach it by return type, or reorder the set.

# Owning a resolved allocation

[`Owned<Resource, Del>`](crate::Owned) pairs one raw handle with a type-level
deleter. Construction invokes its allocator exactly once; drop invokes
[`Deleter::release`](crate::Deleter::release) exactly once (skipping null handles,
which mean "nothing was produced"). There is no clone, no early release, and no
detach; moving the wrapper moves the obligation.

The allocator can be a plain callable, or a selector resolved by the declared
resource type, which is exactly the allocator-family situation above:

```
use eclectic::prelude::*;

fn alloc_s8(len: usize) -> *mut i8 {
    Box::into_raw(vec![0i8; len].into_boxed_slice()) as *mut i8
}

fn alloc_s32(len: usize) -> *mut i32 {
    Box::into_raw(vec![0i32; len].into_boxed_slice()) as *mut i32
}

struct FreeS32;

impl Deleter<i32> for FreeS32 {
    fn release(handle: *mut i32) {
        drop(unsafe { Vec::from_raw_parts(handle, 4, 4) });
    }
}

let alloc = overloads![alloc_s8, alloc_s32];

// Declared over `i32`: resolves to `alloc_s32` by return type, and the handle is
// released when `buffer` falls out of scope.
let buffer = acquire!(i32, FreeS32; alloc, 4usize);
drop(buffer);
```

# When nothing matches

Every failure is a build failure. A selector cannot even be *formed* empty:

```compile_fail
use eclectic::Overloads;

let empty = Overloads::new(());
```

And a call no candidate accepts is reported where it is written: the probe runs off
the end of the candidate list, and the compiler lists each candidate's failed
applicability bound:

```compile_fail
use eclectic::prelude::*;

fn from_pair(hi: u8, lo: u8) -> usize {
    usize::from(hi) * 256 + usize::from(lo)
}

let width = overloads![from_pair];
dispatch!(width, 1u16, 0u16); // no candidate takes (u16, u16)
```
*/
