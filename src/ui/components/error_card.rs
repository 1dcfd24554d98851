//! Inline scan error card.

use crate::ui::helpers::Canvas;
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorCardInfo;

/// Renders an error card centered in the pane.
///
/// # Returns
///
/// The row after the last line drawn.
pub fn render_error_card(
    canvas: &mut Canvas,
    row: usize,
    error: &ErrorCardInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title_style = format!("{}{}", Theme::bold(), theme.fg_token(ColorToken::Warning));
    canvas.centered_line(
        row,
        cols,
        &title_style,
        &format!("{}  {}", error.icon, error.title),
    );
    canvas.centered_line(
        row + 1,
        cols,
        &theme.fg_token(ColorToken::TextSecondary),
        &error.message,
    );

    if !error.retryable {
        return row + 2;
    }
    canvas.centered_line(
        row + 2,
        cols,
        &theme.fg_token(ColorToken::GainGreen),
        "↻ Try again",
    );
    row + 3
}
