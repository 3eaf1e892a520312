/// The `acquire!` macro constructs an [`Owned`](crate::Owned) wrapper from a selector,
/// resolving the allocator by its return type.
///
/// `acquire!(Resource, Del; selector, args...)` scans `selector` for the first
/// candidate that accepts `args` and returns exactly `*mut Resource`, invokes it once,
/// and hands the resulting handle to `Owned<Resource, Del>`. If no candidate has the
/// required signature and return type, the program fails to compile, exactly like an
/// unresolvable [`dispatch_for!`](crate::dispatch_for!).
///
/// # Examples
///
/// ```
/// use eclectic::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// static FREED: AtomicUsize = AtomicUsize::new(0);
///
/// fn alloc_s8(len: usize) -> *mut i8 {
///     Box::into_raw(vec![0i8; len].into_boxed_slice()) as *mut i8
/// }
///
/// fn alloc_s32(len: usize) -> *mut i32 {
///     Box::into_raw(vec![0i32; len].into_boxed_slice()) as *mut i32
/// }
///
/// struct FreeS32;
///
/// impl Deleter<i32> for FreeS32 {
///     fn release(handle: *mut i32) {
///         drop(unsafe { Vec::from_raw_parts(handle, 4, 4) });
///         FREED.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// let alloc = overloads![alloc_s8, alloc_s32];
/// {
///     // Declared over `i32`, so this must resolve to `alloc_s32`, not `alloc_s8`.
///     let _buffer = acquire!(i32, FreeS32; alloc, 4usize);
/// }
/// assert_eq!(FREED.load(Ordering::SeqCst), 1);
/// ```
///
/// A selector with no allocator for the declared resource type is rejected at
/// compile time:
///
/// ```compile_fail
/// use eclectic::prelude::*;
///
/// fn alloc_s8(len: usize) -> *mut i8 {
///     let _ = len;
///     std::ptr::null_mut()
/// }
///
/// struct FreeF64;
///
/// impl Deleter<f64> for FreeF64 {
///     fn release(_handle: *mut f64) {}
/// }
///
/// let alloc = overloads![alloc_s8];
/// let buffer = acquire!(f64, FreeF64; alloc, 4usize);
/// ```
#[macro_export]
macro_rules! acquire {
    ($Resource:ty, $Del:ty; $selector:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::resolve::Resolve as _;
        let selector = &$selector;
        let args = ($($arg,)*);
        $crate::Owned::<$Resource, $Del>::from_raw(
            selector
                .probe_for::<*mut $Resource, _>(&args)
                .resolve(selector.candidates(), args),
        )
    }};
}
