// src/lib.rs
//! Colored debug, warning and assertion macros for contest solutions
//!
//! - [`cp_debug!`] prints an expression and its value
//! - [`cp_warning!`] complains when a condition does not hold
//! - [`cp_assert!`] raises a [`Failure`] when a condition does not hold
//! - [`cp_unreachable!`] raises a [`Failure`] unconditionally
//!
//! Every line goes to stderr as `<file>:<line>: <label><text>`. Failures unwind to the nearest
//! [`catch`], which lets a stress test record the offending input and keep going.
//!
//! Building without the `enabled` feature keeps every call site compiling while falling back to
//! `assert!` and friends.

pub mod config;
pub mod failure;
pub mod flags;
pub mod globals;
mod macros;
#[doc(hidden)]
pub mod report;
pub mod stress;
pub mod style;

pub use failure::{
    DEFAULT_MESSAGE,
    Failure,
    catch,
};
pub use report::capture;

/// Whether the diagnostic backend was compiled in
pub const ENABLED: bool = cfg!(feature = "enabled");
