/// The `overloads!` macro constructs an [`Overloads`](crate::Overloads) selector from
/// one or more candidate callables, in the order given.
///
/// Order matters: it is the search order for every subsequent
/// [`dispatch!`](crate::dispatch!) and [`dispatch_for!`](crate::dispatch_for!), and
/// the earliest match always wins.
///
/// # Examples
///
/// ```
/// use eclectic::prelude::*;
///
/// fn negate(x: i32) -> i32 {
///     -x
/// }
///
/// fn invert(x: f32) -> f32 {
///     1.0 / x
/// }
///
/// let flip = overloads![negate, invert];
/// assert_eq!(flip.arity(), 2);
/// assert_eq!(dispatch!(flip, 3i32), -3);
/// ```
///
/// A selector must have at least one candidate; an empty invocation does not expand:
///
/// ```compile_fail
/// use eclectic::prelude::*;
///
/// let empty = overloads![];
/// ```
#[macro_export]
macro_rules! overloads {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Overloads::new(($head, $($tail,)*))
    };
}
