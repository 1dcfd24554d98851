//! Tab bar and screen title renderers.

use crate::ui::helpers::{display_width, truncate, Canvas};
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabInfo};

/// Renders the tab bar at the specified row.
///
/// The active tab is drawn as a filled green pill; the others are plain
/// secondary text. Each tab shows its number shortcut.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tab_bar(
    canvas: &mut Canvas,
    row: usize,
    tabs: &[TabInfo],
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(1);
    let mut used = 1;

    for tab in tabs {
        let text = format!(" {} {} ", tab.shortcut, tab.label);
        if tab.is_active {
            canvas.push(Theme::bold());
            canvas.push(&theme.fg_token(ColorToken::Background));
            canvas.push(&theme.bg_token(ColorToken::GainGreen));
        } else {
            canvas.push(&theme.fg_token(ColorToken::TextSecondary));
        }
        canvas.push(&text);
        canvas.push(Theme::reset());
        canvas.pad(1);
        used += display_width(&text) + 1;
    }

    canvas.pad(cols.saturating_sub(used));
    row + 1
}

/// Renders the screen title and subtitle.
///
/// An empty subtitle still takes its row so screens line up.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(
    canvas: &mut Canvas,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = cols.saturating_sub(2);

    canvas.position_cursor(row, 1);
    canvas.pad(1);
    canvas.push(Theme::bold());
    canvas.colored(theme, ColorToken::TextPrimary, &truncate(&header.title, width));

    canvas.position_cursor(row + 1, 1);
    canvas.pad(1);
    canvas.colored(
        theme,
        ColorToken::TextSecondary,
        &truncate(&header.subtitle, width),
    );

    row + 2
}
