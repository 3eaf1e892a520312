/// The `dispatch!` macro invokes a selector with an argument list, forwarding to the
/// first candidate invocable with those argument types.
///
/// Resolution happens entirely during type checking: the macro expands to a
/// [`probe`](crate::Overloads::probe) of the argument tuple followed by a
/// [`resolve`](crate::resolve::Resolve::resolve), and the compiler's scan of the
/// probe's deref chain picks the candidate. The selected call is direct; there is no
/// run-time branching, and candidates after the first match are never considered: if
/// two candidates accept the same arguments, the earlier one silently wins.
///
/// # Examples
///
/// ```
/// use eclectic::prelude::*;
///
/// fn sum_s8(val: *const i8, len: usize) -> i64 {
///     let mut total = 0;
///     for offset in 0..len {
///         total += i64::from(unsafe { *val.add(offset) });
///     }
///     total
/// }
///
/// fn sum_f32(val: *const f32, len: usize) -> f64 {
///     let mut total = 0.0;
///     for offset in 0..len {
///         total += f64::from(unsafe { *val.add(offset) });
///     }
///     total
/// }
///
/// let bytes = [1i8, 2, 3];
/// let floats = [0.5f32, 0.25];
///
/// let sum = overloads![sum_s8, sum_f32];
/// assert_eq!(dispatch!(sum, bytes.as_ptr(), bytes.len()), 6);
/// assert_eq!(dispatch!(sum, floats.as_ptr(), floats.len()), 0.75);
/// ```
///
/// An argument list no candidate accepts is rejected at compile time, because the probe
/// walks off the end of the candidate list and has no `resolve` to call:
///
/// ```compile_fail
/// use eclectic::prelude::*;
///
/// fn only(x: i32) -> i32 {
///     x
/// }
///
/// let selector = overloads![only];
/// dispatch!(selector, "not an i32");
/// ```
#[macro_export]
macro_rules! dispatch {
    ($selector:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::resolve::Resolve as _;
        let selector = &$selector;
        let args = ($($arg,)*);
        selector.probe(&args).resolve(selector.candidates(), args)
    }};
}

/// The `dispatch_for!` macro invokes a selector with an argument list and an explicit
/// required return type, forwarding to the first candidate that both accepts the
/// arguments *and* declares exactly that return type.
///
/// This is how a caller disambiguates candidates that accept the same arguments but
/// return different types, most usefully allocators, which all take a size but
/// produce differently-typed handles. The return type is compared for exact equality;
/// no conversion is applied.
///
/// # Examples
///
/// ```
/// use eclectic::prelude::*;
///
/// fn alloc_s8(len: usize) -> *mut i8 {
///     Box::into_raw(vec![0i8; len].into_boxed_slice()) as *mut i8
/// }
///
/// fn alloc_s32(len: usize) -> *mut i32 {
///     Box::into_raw(vec![0i32; len].into_boxed_slice()) as *mut i32
/// }
///
/// let alloc = overloads![alloc_s8, alloc_s32];
///
/// // Both candidates accept `(usize,)`; the return type picks the second.
/// let handle: *mut i32 = dispatch_for!(*mut i32; alloc, 4);
/// # drop(unsafe { Vec::from_raw_parts(handle, 4, 4) });
/// ```
///
/// Requesting a return type no candidate declares fails to compile:
///
/// ```compile_fail
/// use eclectic::prelude::*;
///
/// fn alloc_s8(len: usize) -> *mut i8 {
///     let _ = len;
///     std::ptr::null_mut()
/// }
///
/// let alloc = overloads![alloc_s8];
/// let handle = dispatch_for!(*mut u64; alloc, 4);
/// ```
#[macro_export]
macro_rules! dispatch_for {
    ($Return:ty; $selector:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::resolve::Resolve as _;
        let selector = &$selector;
        let args = ($($arg,)*);
        selector
            .probe_for::<$Return, _>(&args)
            .resolve(selector.candidates(), args)
    }};
}
