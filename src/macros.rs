// macros.rs
//
// defines the diagnostic macros
//
// With the `enabled` feature off, the same names and call shapes fall back to std: debug prints
// and warnings vanish, assertions become `assert!` and unreachable markers exit with 42.

/// `"<file>:<line>"` of the invocation, as a `&'static str`
#[macro_export]
macro_rules! location {
    () => {
        concat!(file!(), ":", line!())
    };
}

/// Prints an expression and its value to stderr
///
/// `cp_debug!(x + y)` prints `<file>:<line>: debug: x + y = 7` using `Display`. Prefix the
/// expression with `?` to use `Debug` instead. Several expressions print one line each.
///
/// ```no_run
/// let v = vec![1, 2, 3];
/// cpdiag::cp_debug!(v.len());
/// cpdiag::cp_debug!(?v);
/// cpdiag::cp_debug!(v[0], v[2]);
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! cp_debug {
    (? $expr:expr $(,)?) => {
        $crate::report::debug($crate::location!(), stringify!($expr), format_args!("{:?}", &$expr))
    };
    ($expr:expr $(,)?) => {
        $crate::report::debug($crate::location!(), stringify!($expr), &$expr)
    };
    ($($expr:expr),+ $(,)?) => {{
        $( $crate::report::debug($crate::location!(), stringify!($expr), &$expr); )+
    }};
}

/// Prints the condition to stderr if it does not hold. Never raises.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! cp_warning {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::report::warning($crate::location!(), stringify!($cond))
        }
    };
}

/// Checks a condition, raising a [`Failure`](crate::Failure) if it does not hold
///
/// The message defaults to the condition's source text. A string literal message is a format
/// string like in `assert!`; any other message only has to be `Display`.
///
/// ```no_run
/// use cpdiag::{catch, cp_assert};
///
/// let result = catch(|| {
///     cp_assert!(2 + 2 == 4);
///     cp_assert!(2 + 2 == 5, "math is broken");
/// });
/// assert!(result.is_err());
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! cp_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::report::assertion($crate::location!(), stringify!($cond))
        }
    };
    ($cond:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        if !$cond {
            $crate::report::assertion($crate::location!(), format_args!($fmt $(, $($arg)+)?))
        }
    };
    ($cond:expr, $msg:expr $(,)?) => {
        if !$cond {
            $crate::report::assertion($crate::location!(), $msg)
        }
    };
}

/// Marks code that should never run. Reaching it prints and raises a
/// [`Failure`](crate::Failure).
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! cp_unreachable {
    () => {
        $crate::report::unreachable($crate::location!(), "")
    };
    ($fmt:literal $(, $($arg:tt)+)?) => {
        $crate::report::unreachable($crate::location!(), format_args!($fmt $(, $($arg)+)?))
    };
    ($msg:expr $(,)?) => {
        $crate::report::unreachable($crate::location!(), $msg)
    };
}

#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! cp_debug {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! cp_warning {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! cp_assert {
    ($cond:expr $(,)?) => {
        assert!($cond)
    };
    ($cond:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        assert!($cond, $fmt $(, $($arg)+)?)
    };
    ($cond:expr, $msg:expr $(,)?) => {
        assert!($cond, "{}", $msg)
    };
}

#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! cp_unreachable {
    ($($tt:tt)*) => {
        ::std::process::exit(42)
    };
}
