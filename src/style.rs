// src/style.rs
//! ANSI styling for diagnostic lines
//!
//! Every helper wraps its text as `ESC[1;<start>m<text>ESC[<end>m`. Colour is emitted
//! unconditionally unless it has been turned off through [`crate::flags`] or the config.

use crate::flags;

// foreground colors
pub const BLACK_FG: u8 = 30;
pub const RED_FG: u8 = 31;
pub const GREEN_FG: u8 = 32;
pub const YELLOW_FG: u8 = 33;
pub const BLUE_FG: u8 = 34;
pub const MAGENTA_FG: u8 = 35;
pub const CYAN_FG: u8 = 36;
pub const WHITE_FG: u8 = 37;

// background colors
pub const BLACK_BG: u8 = 40;
pub const RED_BG: u8 = 41;
pub const GREEN_BG: u8 = 42;
pub const YELLOW_BG: u8 = 43;
pub const BLUE_BG: u8 = 44;
pub const MAGENTA_BG: u8 = 45;
pub const CYAN_BG: u8 = 46;
pub const WHITE_BG: u8 = 47;

// text styles
/// Everything back to normal
pub const RESET: u8 = 0;
/// Often a brighter shade of the same colour
pub const BOLD: u8 = 1;
pub const UNDERLINE: u8 = 4;
/// Swap foreground and background colours
pub const INVERSE: u8 = 7;
pub const BOLD_OFF: u8 = 21;
pub const UNDERLINE_OFF: u8 = 24;
pub const INVERSE_OFF: u8 = 27;

/// Wraps `text` in the escape sequences for `start` and `end`
///
/// Returns `text` untouched when colour is disabled.
pub fn formatted(text: &str, start: u8, end: u8) -> String {
    if !flags::color_enabled() {
        return text.to_string();
    }

    format!("\x1b[1;{start}m{text}\x1b[{end}m")
}

pub fn black(text: &str) -> String { formatted(text, BLACK_FG, RESET) }
pub fn red(text: &str) -> String { formatted(text, RED_FG, RESET) }
pub fn green(text: &str) -> String { formatted(text, GREEN_FG, RESET) }
pub fn yellow(text: &str) -> String { formatted(text, YELLOW_FG, RESET) }
pub fn blue(text: &str) -> String { formatted(text, BLUE_FG, RESET) }
pub fn magenta(text: &str) -> String { formatted(text, MAGENTA_FG, RESET) }
pub fn cyan(text: &str) -> String { formatted(text, CYAN_FG, RESET) }
pub fn white(text: &str) -> String { formatted(text, WHITE_FG, RESET) }

pub fn bold(text: &str) -> String { formatted(text, BOLD, RESET) }
pub fn underline(text: &str) -> String { formatted(text, UNDERLINE, RESET) }
pub fn inverse(text: &str) -> String { formatted(text, INVERSE, RESET) }
