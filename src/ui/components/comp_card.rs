//! Comparable listing strip.

use super::skeleton::render_comps_skeleton;
use crate::ui::helpers::{display_width, fit, truncate, Canvas};
use crate::ui::styles::{comp_status_style, ColorToken};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CompCardInfo, CompsInfo};

/// Width of one comp card, excluding the gutter after it.
pub const COMP_CARD_WIDTH: usize = 26;

/// Rows taken by the strip: a heading and three card lines.
pub const COMPS_HEIGHT: usize = 4;

/// Number of comp cards that fit across `cols`.
#[must_use]
pub fn comp_slots(cols: usize) -> usize {
    (cols.saturating_sub(2) / (COMP_CARD_WIDTH + 1)).max(1)
}

/// Renders the heading and as many cards as fit side by side.
///
/// ```text
///  Comparable listings  3 sold · 1 active · median $65
///  SOLD       eBay · 2d ago   ACTIVE      eBay · listed
///  Patagonia Better Sweate…  Patagonia Men's Better …
///  $65                        $90
/// ```
///
/// While loading, the summary is left out and the cards are placeholders.
///
/// # Returns
///
/// The next available row position (row + 4)
pub fn render_comps(
    canvas: &mut Canvas,
    row: usize,
    comps: &CompsInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 2);
    canvas.push(Theme::bold());
    canvas.colored(theme, ColorToken::TextPrimary, &comps.title);
    if !comps.loading {
        let room = cols.saturating_sub(3 + display_width(&comps.title));
        canvas.pad(2);
        canvas.colored(theme, ColorToken::TextTertiary, &truncate(&comps.summary, room));
    }

    let slots = comp_slots(cols);
    if comps.loading {
        render_comps_skeleton(canvas, row + 1, slots, COMP_CARD_WIDTH, theme);
    } else {
        for (slot, card) in comps.cards.iter().take(slots).enumerate() {
            let col = 2 + slot * (COMP_CARD_WIDTH + 1);
            render_comp_card(canvas, row + 1, col, card, theme);
        }
    }

    row + COMPS_HEIGHT
}

fn render_comp_card(
    canvas: &mut Canvas,
    row: usize,
    col: usize,
    card: &CompCardInfo,
    theme: &Theme,
) {
    let inner = COMP_CARD_WIDTH - 2;
    let card_bg = theme.bg_token(ColorToken::Card);
    let (badge, badge_color) = comp_status_style(card.status);

    // Status badge with the source and age pushed right.
    canvas.position_cursor(row, col);
    canvas.push(&card_bg);
    canvas.push(" ");
    canvas.push(Theme::bold());
    canvas.push(&theme.fg_token(badge_color));
    canvas.push(badge);
    canvas.push(Theme::reset());
    canvas.push(&card_bg);
    canvas.push(&theme.fg_token(ColorToken::TextTertiary));
    let room = inner.saturating_sub(display_width(badge));
    let detail = truncate(&card.detail, room.saturating_sub(1));
    canvas.pad(room.saturating_sub(display_width(&detail)));
    canvas.push(&detail);
    canvas.push(" ");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 1, col);
    canvas.push(&card_bg);
    canvas.push(&theme.fg_token(ColorToken::TextPrimary));
    canvas.push(" ");
    canvas.push(&fit(&card.title, inner));
    canvas.push(" ");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 2, col);
    canvas.push(&card_bg);
    canvas.push(" ");
    canvas.push(Theme::bold());
    canvas.push(&theme.fg_token(ColorToken::TextPrimary));
    canvas.push(&card.price);
    canvas.push(Theme::reset());
    canvas.push(&card_bg);
    canvas.pad(inner.saturating_sub(display_width(&card.price)) + 1);
    canvas.push(Theme::reset());
}
