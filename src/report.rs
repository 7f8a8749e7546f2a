// src/report.rs
//! Composes and writes the diagnostic lines behind the macros
//!
//! The macros call into here with their location and source text already baked in. Lines go to
//! stderr in one write each, unless a [`capture`] is active on the current thread.

use std::{
    cell::RefCell,
    fmt::Display,
    io::{
        self,
        Write,
    },
};

use tracing::{
    error,
    trace,
    warn,
};

use crate::{
    failure::Failure,
    style,
};

thread_local! {
    static CAPTURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(crate) fn emit(line: &str) {
    let captured = CAPTURE.with_borrow_mut(|buf| match buf {
        | Some(buf) => {
            buf.push_str(line);
            true
        },
        | None => false,
    });
    if captured {
        return;
    }

    // a failed diagnostic write has nowhere better to go
    let _ = io::stderr().lock().write_all(line.as_bytes());
}

fn compose(location: &str, label: &str, body: &str) -> String {
    format!("{}{}{body}\n", style::bold(&format!("{location}: ")), label)
}

/// Runs `f` with diagnostic lines on this thread collected instead of written
///
/// Lines written before a failure unwinds out of `f` are kept in the buffer, and the previous
/// destination is restored either way. Use [`crate::catch`] inside `f` to see them.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    struct Restore(Option<String>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            CAPTURE.with_borrow_mut(|buf| *buf = previous);
        }
    }

    let previous = CAPTURE.with_borrow_mut(|buf| buf.replace(String::new()));
    let restore = Restore(previous);
    let out = f();
    let captured = CAPTURE.with_borrow_mut(|buf| buf.take()).unwrap_or_default();
    drop(restore);
    (out, captured)
}

#[doc(hidden)]
pub fn debug(location: &str, expr: &str, value: impl Display) {
    let value = value.to_string();
    trace!(location, expr, %value, "debug");
    emit(&compose(location, &style::yellow("debug: "), &format!("{expr} = {value}")));
}

#[doc(hidden)]
pub fn warning(location: &str, condition: &str) {
    warn!(location, condition, "warning check failed");
    emit(&compose(location, &style::magenta("warning check failed: "), condition));
}

#[doc(hidden)]
pub fn assertion(location: &str, message: impl Display) -> ! {
    let message = message.to_string();
    error!(location, %message, "assertion check failed");
    emit(&compose(location, &style::red("assertion check failed: "), &message));
    Failure::new(message, Some(location)).raise()
}

#[doc(hidden)]
pub fn unreachable(location: &str, message: impl Display) -> ! {
    let message = message.to_string();
    error!(location, %message, "unreachable code reached");
    emit(&compose(location, &style::red("unreachable code. "), &message));
    Failure::new(message, Some(location)).raise()
}
