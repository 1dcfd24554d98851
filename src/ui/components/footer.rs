//! Footer component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders a separator and the centered keybinding hints on the last two
/// rows of the pane.
pub fn render_footer(canvas: &mut Canvas, footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.max(2);
    canvas.rule(footer_row - 1, theme, cols);
    canvas.centered_line(
        footer_row,
        cols,
        &theme.fg_token(ColorToken::TextTertiary),
        &footer.keybindings,
    );
}
