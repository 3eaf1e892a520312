use eclectic::prelude::*;
use eclectic::resolve::Probe;
use eclectic::unary::types::*;
use eclectic::unary::Z;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

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

#[test]
fn each_argument_shape_reaches_its_own_candidate() {
    let arr_ch = [0i8; 1];
    let arr_int = [0i32; 1];
    let arr_f32 = [0f32; 1];

    let square = overloads![square_s8, square_s32, square_f32];

    assert_eq!(dispatch!(square, arr_ch.as_ptr(), arr_ch.len()), 1);
    assert_eq!(dispatch!(square, arr_int.as_ptr(), arr_int.len()), 4);
    assert_eq!(dispatch!(square, arr_f32.as_ptr()), 8);
}

#[test]
fn selection_order_is_stable_under_ties() {
    fn first(x: i32) -> u32 {
        let _ = x;
        0
    }
    fn second(x: i32) -> u32 {
        let _ = x;
        1
    }

    // Both candidates accept `(i32,)`; index 0 must win every time, on every call.
    let tied = overloads![first, second];
    for _ in 0..3 {
        assert_eq!(dispatch!(tied, 7i32), 0);
    }

    let reversed = overloads![second, first];
    assert_eq!(dispatch!(reversed, 7i32), 1);
}

#[test]
fn resolution_reports_the_selected_index() {
    let arr_int = [0i32; 1];
    let arr_f32 = [0f32; 1];

    let square = overloads![square_s8, square_s32, square_f32];
    let args = (arr_int.as_ptr(), arr_int.len());
    assert_eq!(square.probe(&args).index(), 1);
    let args = (arr_f32.as_ptr(),);
    assert_eq!(square.probe(&args).index(), 2);
    assert_eq!(square.arity(), 3);

    // The reported index reaches the same candidate positionally.
    let selected = square.candidate::<_2>();
    assert_eq!(selected(arr_f32.as_ptr()), 8);
}

#[test]
fn nullary_and_closure_candidates_participate() {
    fn zero() -> u64 {
        0
    }
    let one = |x: u8| u64::from(x);

    let mixed = overloads![zero, one];
    assert_eq!(dispatch!(mixed), 0);
    assert_eq!(dispatch!(mixed, 41u8), 41);
}

#[test]
fn only_the_selected_candidate_runs() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static CALLS_S8: AtomicUsize = AtomicUsize::new(0);
    static CALLS_S32: AtomicUsize = AtomicUsize::new(0);

    fn touch_s8(val: *const i8) -> usize {
        let _ = val;
        CALLS_S8.fetch_add(1, Ordering::SeqCst)
    }
    fn touch_s32(val: *const i32) -> usize {
        let _ = val;
        CALLS_S32.fetch_add(1, Ordering::SeqCst)
    }

    let touch = overloads![touch_s8, touch_s32];
    let word = 0i32;
    let _ = dispatch!(touch, &word as *const i32);
    assert_eq!(CALLS_S8.load(Ordering::SeqCst), 0);
    assert_eq!(CALLS_S32.load(Ordering::SeqCst), 1);
}

// The scan is pure type information, so its outcomes can be checked statically on
// nameable (pointer-typed) candidate lists.
type Square = (
    fn(*const i8, usize) -> i32,
    (fn(*const i32, usize) -> i32, (fn(*const f32) -> i32, ())),
);

assert_impl_all!(Probe<(*const i8, usize), Z, Square>: Resolve<(*const i8, usize)>);
assert_not_impl_any!(Probe<(*const i32, usize), Z, Square>: Resolve<(*const i32, usize)>);
assert_not_impl_any!(Probe<(*const u64,), Z, Square>: Resolve<(*const u64,)>);
assert_type_eq_all!(
    <Probe<(*const i8, usize), Z, Square> as Resolve<(*const i8, usize)>>::Index,
    _0
);
assert_type_eq_all!(
    <Probe<(*const i8, usize), Z, Square> as Resolve<(*const i8, usize)>>::Output,
    i32
);
assert_type_eq_all!(<Square as eclectic::list::HasLength>::Length, _3);
