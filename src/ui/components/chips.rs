//! Filter chip row.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipInfo;

/// Renders the filter chips left to right. Chips that would overflow the
/// pane are dropped.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_chips(
    canvas: &mut Canvas,
    row: usize,
    chips: &[ChipInfo],
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(1);
    let mut used = 1;

    for chip in chips {
        let text = format!(" {} ", chip.label);
        let width = display_width(&text) + 1;
        if used + width > cols {
            break;
        }

        if chip.is_active {
            canvas.push(Theme::bold());
            canvas.push(&theme.fg_token(ColorToken::Background));
            canvas.push(&theme.bg_token(ColorToken::TextPrimary));
        } else {
            canvas.push(&theme.fg_token(ColorToken::TextSecondary));
            canvas.push(&theme.bg_token(ColorToken::Card));
        }
        canvas.push(&text);
        canvas.push(Theme::reset());
        canvas.pad(1);
        used += width;
    }

    row + 1
}
