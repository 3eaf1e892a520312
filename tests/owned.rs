use std::sync::atomic::{AtomicUsize, Ordering};

use eclectic::prelude::*;

#[test]
fn allocator_and_deleter_each_run_exactly_once() {
    static ALLOCS: AtomicUsize = AtomicUsize::new(0);
    static RELEASES: AtomicUsize = AtomicUsize::new(0);

    fn alloc(value: i32) -> *mut i32 {
        ALLOCS.fetch_add(1, Ordering::SeqCst);
        Box::into_raw(Box::new(value))
    }

    struct Free;
    impl Deleter<i32> for Free {
        fn release(handle: *mut i32) {
            drop(unsafe { Box::from_raw(handle) });
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
    }

    {
        let owned: Owned<i32, Free> = Owned::with(alloc, (7,));
        let _ = &owned;
        assert_eq!(ALLOCS.load(Ordering::SeqCst), 1);
        assert_eq!(RELEASES.load(Ordering::SeqCst), 0);
    }
    assert_eq!(ALLOCS.load(Ordering::SeqCst), 1);
    assert_eq!(RELEASES.load(Ordering::SeqCst), 1);
}

#[test]
fn a_null_handle_is_not_released() {
    static RELEASES: AtomicUsize = AtomicUsize::new(0);

    fn alloc_nothing(sz: i32) -> *mut i32 {
        let _ = sz;
        std::ptr::null_mut()
    }

    struct Free;
    impl Deleter<i32> for Free {
        fn release(_handle: *mut i32) {
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
    }

    {
        let _owned: Owned<i32, Free> = Owned::with(alloc_nothing, (4,));
    }
    assert_eq!(RELEASES.load(Ordering::SeqCst), 0);
}

#[test]
fn moving_the_wrapper_releases_exactly_once_at_the_final_owner() {
    static RELEASES: AtomicUsize = AtomicUsize::new(0);

    fn alloc(value: i32) -> *mut i32 {
        Box::into_raw(Box::new(value))
    }

    struct Free;
    impl Deleter<i32> for Free {
        fn release(handle: *mut i32) {
            drop(unsafe { Box::from_raw(handle) });
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn relay(owned: Owned<i32, Free>) -> Owned<i32, Free> {
        owned
    }

    {
        let owned: Owned<i32, Free> = Owned::with(alloc, (7,));
        let moved = relay(owned);
        let mut parked = Vec::new();
        parked.push(moved);
        assert_eq!(RELEASES.load(Ordering::SeqCst), 0);
    }
    assert_eq!(RELEASES.load(Ordering::SeqCst), 1);
}

#[test]
fn a_selector_backed_wrapper_resolves_its_allocator_by_return_type() {
    static CALLS_A: AtomicUsize = AtomicUsize::new(0);
    static CALLS_B: AtomicUsize = AtomicUsize::new(0);
    static RELEASES: AtomicUsize = AtomicUsize::new(0);

    fn alloc_a(sz: i32) -> *mut i8 {
        let _ = sz;
        CALLS_A.fetch_add(1, Ordering::SeqCst);
        Box::into_raw(Box::new(0i8))
    }

    fn alloc_b(sz: i32) -> *mut i32 {
        CALLS_B.fetch_add(1, Ordering::SeqCst);
        Box::into_raw(Box::new(sz))
    }

    struct FreeB;
    impl Deleter<i32> for FreeB {
        fn release(handle: *mut i32) {
            drop(unsafe { Box::from_raw(handle) });
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
    }

    let alloc = overloads![alloc_a, alloc_b];
    {
        // The wrapper is declared over `i32`, so the selector must resolve to
        // `alloc_b` even though `alloc_a` also accepts the argument.
        let _buffer = acquire!(i32, FreeB; alloc, 4i32);
        assert_eq!(CALLS_A.load(Ordering::SeqCst), 0);
        assert_eq!(CALLS_B.load(Ordering::SeqCst), 1);
    }
    assert_eq!(CALLS_B.load(Ordering::SeqCst), 1);
    assert_eq!(RELEASES.load(Ordering::SeqCst), 1);
}
