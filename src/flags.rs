// flags.rs
//
// stores the colour flag for global use

use std::{
    cell::Cell,
    io::{
        self,
        IsTerminal,
    },
    sync::atomic::{
        AtomicU8,
        Ordering,
    },
};

use crate::{
    config::ColorChoice,
    globals::CONFIG,
};

const UNSET: u8 = 0;

static COLOR: AtomicU8 = AtomicU8::new(UNSET);

thread_local! {
    static SCOPED_COLOR: Cell<Option<ColorChoice>> = const { Cell::new(None) };
}

const fn encode(choice: ColorChoice) -> u8 {
    match choice {
        | ColorChoice::Always => 1,
        | ColorChoice::Auto => 2,
        | ColorChoice::Never => 3,
    }
}

const fn decode(raw: u8) -> Option<ColorChoice> {
    match raw {
        | 1 => Some(ColorChoice::Always),
        | 2 => Some(ColorChoice::Auto),
        | 3 => Some(ColorChoice::Never),
        | _ => None,
    }
}

/// Overrides the configured colour choice for the whole process
pub fn set_color(choice: ColorChoice) {
    COLOR.store(encode(choice), Ordering::Relaxed);
}

/// Drops the process-wide override so the config decides again
pub fn reset_color() {
    COLOR.store(UNSET, Ordering::Relaxed);
}

/// The colour choice in effect on this thread
///
/// A [`with_color`] scope wins over [`set_color`], which wins over the config.
pub fn color_choice() -> ColorChoice {
    SCOPED_COLOR
        .get()
        .or_else(|| decode(COLOR.load(Ordering::Relaxed)))
        .unwrap_or(CONFIG.diagnostics.color)
}

pub fn color_enabled() -> bool {
    match color_choice() {
        | ColorChoice::Always => true,
        | ColorChoice::Never => false,
        | ColorChoice::Auto => io::stderr().is_terminal(),
    }
}

/// Runs `f` with `choice` in effect on the current thread only
pub fn with_color<R>(choice: ColorChoice, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<ColorChoice>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SCOPED_COLOR.set(self.0);
        }
    }

    let _restore = Restore(SCOPED_COLOR.replace(Some(choice)));
    f()
}
