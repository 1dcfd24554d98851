//! Shared rendering utilities.
//!
//! Components write into a [`Canvas`], a string buffer of ANSI output, rather
//! than printing directly. The renderer flushes the finished frame to stdout
//! in one go, and tests inspect the buffer.

use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use std::fmt::Write as _;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// ANSI output buffer for one frame.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed row and column.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    /// Appends raw text or escape sequences.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Appends text in a palette color, followed by a reset.
    pub fn colored(&mut self, theme: &Theme, token: ColorToken, text: &str) {
        self.buf.push_str(&theme.fg_token(token));
        self.buf.push_str(text);
        self.buf.push_str(Theme::reset());
    }

    /// Writes `text` centered in a full-width line at `row`.
    pub fn centered_line(&mut self, row: usize, cols: usize, style: &str, text: &str) {
        let text = truncate(text, cols);
        let len = display_width(&text);
        let left = cols.saturating_sub(len) / 2;

        self.position_cursor(row, 1);
        self.push(style);
        self.pad(left);
        self.push(&text);
        self.pad(cols.saturating_sub(left + len));
        self.push(Theme::reset());
    }

    /// Draws a horizontal rule across the full width.
    pub fn rule(&mut self, row: usize, theme: &Theme, cols: usize) {
        self.position_cursor(row, 1);
        self.colored(theme, ColorToken::Border, &"─".repeat(cols));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of terminal cells a string occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `max` cells, ending in `…` when cut.
///
/// A wide glyph that would straddle the limit is dropped whole.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Left-aligns `text` in a field of `width` cells, truncating if needed.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = display_width(&text);
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Removes ANSI escape sequences, leaving only the visible text.
///
/// Cursor moves become newlines so rendered frames read top to bottom.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            out.push(ch);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        for code in chars.by_ref() {
            if code.is_ascii_alphabetic() {
                if code == 'H' {
                    out.push('\n');
                }
                break;
            }
        }
    }

    out
}
