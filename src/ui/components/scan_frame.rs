//! Camera frame with corner brackets.

use crate::domain::ScanOverlayState;
use crate::ui::helpers::{display_width, Canvas};
use crate::ui::styles::{overlay_style, ColorToken};
use crate::ui::theme::Theme;

const FRAME_WIDTH: usize = 36;
const FRAME_HEIGHT: usize = 7;

/// Renders the indicator line, the frame, the guidance text and the
/// overlay announcement.
///
/// # Layout
///
/// ```text
///   ⚡ Flash off                    ▣ Gallery
///
///            ┏━━                ━━┓
///            ┃                    ┃
///
///            ┃                    ┃
///            ┗━━                ━━┛
///          Center the tag in the frame
///             Searching for tag
/// ```
///
/// # Returns
///
/// The row after the announcement.
pub fn render_scan_frame(
    canvas: &mut Canvas,
    row: usize,
    overlay: ScanOverlayState,
    flash_on: bool,
    guidance: &str,
    theme: &Theme,
    cols: usize,
) -> usize {
    render_indicators(canvas, row, flash_on, theme, cols);

    let style = overlay_style(overlay);
    let width = FRAME_WIDTH.min(cols.saturating_sub(4)).max(8);
    let left = cols.saturating_sub(width) / 2 + 1;
    let mut bracket = theme.fg_token(style.bracket);
    if style.pulsing {
        bracket.push_str(Theme::blink());
    }

    let top = row + 2;
    let span = width - 6;
    for line in 0..FRAME_HEIGHT {
        let text = match line {
            0 => format!("┏━━{}━━┓", " ".repeat(span)),
            l if l == FRAME_HEIGHT - 1 => format!("┗━━{}━━┛", " ".repeat(span)),
            1 | 5 => format!("┃{}┃", " ".repeat(width - 2)),
            _ => continue,
        };
        canvas.position_cursor(top + line, left);
        canvas.push(&bracket);
        canvas.push(&text);
        canvas.push(Theme::reset());
    }

    let after = top + FRAME_HEIGHT;
    canvas.centered_line(
        after,
        cols,
        &theme.fg_token(ColorToken::TextSecondary),
        guidance,
    );
    canvas.centered_line(after + 1, cols, &theme.fg_token(style.bracket), style.announcement);
    after + 2
}

fn render_indicators(canvas: &mut Canvas, row: usize, flash_on: bool, theme: &Theme, cols: usize) {
    let (flash, token) = if flash_on {
        ("⚡ Flash on", ColorToken::Gold)
    } else {
        ("⚡ Flash off", ColorToken::TextSecondary)
    };
    let gallery = "▣ Gallery";

    canvas.position_cursor(row, 1);
    canvas.pad(2);
    canvas.colored(theme, token, flash);
    let used = 2 + display_width(flash) + display_width(gallery) + 2;
    canvas.pad(cols.saturating_sub(used));
    canvas.colored(theme, ColorToken::TextSecondary, gallery);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn searching_frame_pulses() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        let next = render_scan_frame(
            &mut canvas,
            5,
            ScanOverlayState::Searching,
            false,
            "Center the tag in the frame",
            &theme,
            60,
        );
        assert_eq!(next, 5 + 2 + FRAME_HEIGHT + 2);
        assert!(canvas.as_str().contains(Theme::blink()));

        let text = strip_ansi(canvas.as_str());
        assert!(text.contains("Flash off"));
        assert!(text.contains("Searching for tag"));
        assert!(text.contains("┏━━"));
    }

    #[test]
    fn locked_frame_is_steady() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_scan_frame(&mut canvas, 1, ScanOverlayState::Locked, true, "", &theme, 60);
        assert!(!canvas.as_str().contains(Theme::blink()));

        let text = strip_ansi(canvas.as_str());
        assert!(text.contains("Tag detected"));
        assert!(text.contains("Flash on"));
    }

    #[test]
    fn indicator_row_keeps_its_right_margin() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_indicators(&mut canvas, 1, true, &theme, 60);
        let line = strip_ansi(canvas.as_str());
        let line = line.trim_start_matches('\n');
        assert!(line.ends_with("▣ Gallery"));
        assert_eq!(display_width(line), 58);
    }
}
