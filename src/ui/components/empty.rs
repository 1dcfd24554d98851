//! Empty state component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered empty-state card.
///
/// # Layout
///
/// ```text
///            No items here
///   Try a different filter or scan more...
///
///          [ Go to My Finds ]      (only with an action)
/// ```
///
/// # Returns
///
/// The row after the last line drawn.
pub fn render_empty_state(
    canvas: &mut Canvas,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title_style = format!("{}{}", Theme::bold(), theme.fg_token(ColorToken::TextPrimary));
    canvas.centered_line(row, cols, &title_style, &empty.message);
    canvas.centered_line(
        row + 1,
        cols,
        &theme.fg_token(ColorToken::TextSecondary),
        &empty.subtitle,
    );

    let Some(action) = &empty.action else {
        return row + 2;
    };

    let button_style = format!(
        "{}{}",
        Theme::bold(),
        theme.fg_token(ColorToken::GainGreen)
    );
    canvas.centered_line(row + 3, cols, &button_style, &format!("[ {action} ]  ⏎"));
    row + 4
}
