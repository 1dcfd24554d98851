//! Stat card row.

use crate::ui::helpers::{fit, Canvas};
use crate::ui::styles::{trend_style, ColorToken};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatCardInfo;

/// Renders stat cards side by side, each three lines tall: title, value,
/// and a colored trend.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_stat_cards(
    canvas: &mut Canvas,
    row: usize,
    cards: &[StatCardInfo],
    theme: &Theme,
    cols: usize,
) -> usize {
    if cards.is_empty() {
        return row;
    }
    let width = (cols.saturating_sub(1) / cards.len()).saturating_sub(1).max(1);
    let card_bg = theme.bg_token(ColorToken::Card);

    for line in 0..3 {
        canvas.position_cursor(row + line, 1);
        canvas.pad(1);
        for card in cards {
            canvas.push(&card_bg);
            match line {
                0 => {
                    canvas.push(&theme.fg_token(ColorToken::TextSecondary));
                    canvas.push(&fit(&format!(" {}", card.title), width));
                }
                1 => {
                    canvas.push(Theme::bold());
                    canvas.push(&theme.fg_token(ColorToken::TextPrimary));
                    canvas.push(&fit(&format!(" {}", card.value), width));
                }
                _ => {
                    let (glyph, color) = trend_style(card.trend);
                    canvas.push(&theme.fg_token(color));
                    canvas.push(&fit(&format!(" {glyph} {}", card.trend_text), width));
                }
            }
            canvas.push(Theme::reset());
            canvas.pad(1);
        }
    }

    row + 3
}
