//! Portfolio value block at the top of the collection screen.

use crate::ui::helpers::Canvas;
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroInfo;

/// Renders the total value with its ROI pill, the caption, and the profit
/// line.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_hero(canvas: &mut Canvas, row: usize, hero: &HeroInfo, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(1);
    canvas.push(Theme::bold());
    canvas.colored(theme, ColorToken::TextPrimary, &hero.value);
    canvas.pad(2);

    let pill = roi_color(&hero.roi);
    canvas.push(&theme.fg_token(ColorToken::Background));
    canvas.push(&theme.bg_token(pill));
    canvas.push(&format!(" {} ", hero.roi));
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 1, 1);
    canvas.pad(1);
    canvas.colored(theme, ColorToken::TextSecondary, &hero.label);

    canvas.position_cursor(row + 2, 1);
    canvas.pad(1);
    let profit_color = if hero.profit_line.starts_with('-') {
        ColorToken::Warning
    } else {
        ColorToken::GainGreen
    };
    canvas.colored(theme, profit_color, &hero.profit_line);

    row + 3
}

fn roi_color(roi: &str) -> ColorToken {
    if roi.starts_with('+') {
        ColorToken::GainGreen
    } else if roi.starts_with('-') {
        ColorToken::Warning
    } else {
        ColorToken::TextTertiary
    }
}
