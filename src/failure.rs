// src/failure.rs
//! The error raised by failed assertions and reached unreachable markers

use std::{
    fmt,
    panic::{
        self,
        UnwindSafe,
    },
};

use serde::Serialize;

/// Shown when a failure carries no message
pub const DEFAULT_MESSAGE: &str = "Failure";

/// A failed check along with where it happened
///
/// Raised by [`cp_assert!`](crate::cp_assert) and [`cp_unreachable!`](crate::cp_unreachable), and
/// recovered with [`catch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    message:  String,
    location: Option<String>,
}

impl Failure {
    pub fn new(message: impl Into<String>, location: Option<&str>) -> Self {
        Self {
            message:  message.into(),
            location: location.filter(|l| !l.is_empty()).map(str::to_string),
        }
    }

    pub fn message(&self) -> &str { &self.message }

    pub fn location(&self) -> Option<&str> { self.location.as_deref() }

    /// Unwinds with `self` as the payload
    ///
    /// Uses [`panic::resume_unwind`] so the panic hook stays quiet and the diagnostic line
    /// written beforehand is the only output.
    pub fn raise(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }

        if self.message.is_empty() {
            f.write_str(DEFAULT_MESSAGE)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for Failure {}

/// Runs `f`, turning a raised [`Failure`] into `Err`
///
/// Any other panic keeps unwinding.
pub fn catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, Failure> {
    panic::catch_unwind(f).map_err(|payload| match payload.downcast::<Failure>() {
        | Ok(failure) => *failure,
        | Err(other) => panic::resume_unwind(other),
    })
}
