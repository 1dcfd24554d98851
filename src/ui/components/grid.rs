//! Collection card grid.

use crate::ui::helpers::{display_width, fit, Canvas};
use crate::ui::styles::{badge_text, confidence_color, BadgeStyle, ColorToken};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardInfo;

/// Width of one collection card including its gutter.
pub const CARD_WIDTH: usize = 28;

/// Height of one collection card including its gutter.
pub const CARD_HEIGHT: usize = 5;

/// Renders the visible cards, `columns` per row.
///
/// Each card is four lines tall with a one-line gap below:
///
/// ```text
/// ▌ ● 87%              Corrected
///   Carhartt · 2d ago
///   Detroit Jacket
///   $185  $120 – $260
/// ```
///
/// # Returns
///
/// The row after the last card row.
pub fn render_grid(
    canvas: &mut Canvas,
    row: usize,
    cards: &[CardInfo],
    columns: usize,
    theme: &Theme,
) -> usize {
    let columns = columns.max(1);
    let mut next = row;

    for (index, chunk) in cards.chunks(columns).enumerate() {
        let top = row + index * CARD_HEIGHT;
        for (position, card) in chunk.iter().enumerate() {
            let col = 2 + position * CARD_WIDTH;
            render_card(canvas, top, col, card, theme);
        }
        next = top + CARD_HEIGHT;
    }

    next
}

fn render_card(canvas: &mut Canvas, row: usize, col: usize, card: &CardInfo, theme: &Theme) {
    let inner = CARD_WIDTH - 3;
    let card_bg = if card.is_selected {
        theme.bg_token(ColorToken::CardSelected)
    } else {
        theme.bg_token(ColorToken::Card)
    };

    // Badge line: thumbnail swatch, confidence, correction tag.
    canvas.position_cursor(row, col);
    canvas.push(&card_bg);
    canvas.push(&Theme::fg(&card.accent));
    canvas.push("▌ ");
    let badge = badge_text(card.level, card.score, BadgeStyle::Compact);
    canvas.push(&theme.fg_token(confidence_color(card.level)));
    canvas.push(&badge);
    let tag = if card.corrected { "Corrected" } else { "" };
    let gap = inner.saturating_sub(display_width(&badge) + display_width(tag));
    canvas.pad(gap);
    canvas.push(&theme.fg_token(ColorToken::Gold));
    canvas.push(tag);
    canvas.push(" ");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 1, col);
    canvas.push(&card_bg);
    canvas.push(&theme.fg_token(ColorToken::TextSecondary));
    canvas.push("  ");
    canvas.push(&fit(&format!("{} · {}", card.brand, card.added), inner + 1));
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 2, col);
    canvas.push(&card_bg);
    canvas.push(&theme.fg_token(ColorToken::TextPrimary));
    canvas.push("  ");
    canvas.push(&fit(&card.name, inner + 1));
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 3, col);
    canvas.push(&card_bg);
    canvas.push("  ");
    canvas.push(Theme::bold());
    canvas.push(&theme.fg_token(ColorToken::TextPrimary));
    canvas.push(&card.price);
    canvas.push(Theme::reset());
    canvas.push(&card_bg);
    canvas.push(&theme.fg_token(ColorToken::TextTertiary));
    let used = display_width(&card.price);
    canvas.push(&fit(&format!("  {}", card.range), (inner + 1).saturating_sub(used)));
    canvas.push(Theme::reset());
}
