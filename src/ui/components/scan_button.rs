//! Scan button.

use crate::domain::ScanButtonState;
use crate::ui::helpers::{display_width, Canvas};
use crate::ui::styles::{button_style, ColorToken};
use crate::ui::theme::Theme;

/// Renders the scan button and the hint beneath it.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_scan_button(
    canvas: &mut Canvas,
    row: usize,
    state: ScanButtonState,
    theme: &Theme,
    cols: usize,
) -> usize {
    let style = button_style(state);

    let mut button = String::new();
    if style.enabled {
        button.push_str(Theme::bold());
    }
    if style.faded {
        button.push_str(Theme::dim());
    }
    button.push_str(&theme.fg_token(ColorToken::Background));
    button.push_str(&theme.bg_token(style.fill));

    let label = format!("  {} {}  ", style.glyph, style.label);
    let width = display_width(&label);
    let left = cols.saturating_sub(width) / 2 + 1;

    canvas.position_cursor(row, left);
    canvas.push(&button);
    canvas.push(&label);
    canvas.push(Theme::reset());

    let hint = if style.enabled {
        format!("{} · Space", style.hint)
    } else {
        style.hint.to_string()
    };
    canvas.centered_line(row + 1, cols, &theme.fg_token(ColorToken::TextTertiary), &hint);
    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn ready_button_shows_key_hint() {
        let mut canvas = Canvas::new();
        render_scan_button(&mut canvas, 20, ScanButtonState::Ready, &Theme::default(), 60);
        let text = strip_ansi(canvas.as_str());
        assert!(text.contains("◉ Scan item"));
        assert!(text.contains("Takes a photo of the tag and item · Space"));
    }

    #[test]
    fn disabled_button_is_faded() {
        let mut canvas = Canvas::new();
        render_scan_button(&mut canvas, 20, ScanButtonState::Disabled, &Theme::default(), 60);
        assert!(canvas.as_str().contains(Theme::dim()));
        let text = strip_ansi(canvas.as_str());
        assert!(text.contains("Camera unavailable"));
        assert!(!text.contains("Space"));
    }
}
