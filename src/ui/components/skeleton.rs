//! Loading placeholders.
//!
//! Each skeleton covers the same cells as the component it stands in for, so
//! nothing shifts when data replaces it. Blocks are drawn as dim shade glyphs.

use super::grid::{CARD_HEIGHT, CARD_WIDTH};
use crate::ui::helpers::{fit, Canvas};
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;

/// Glyph used for placeholder blocks.
pub const SHADE: char = '░';

/// Cells shown by the grid skeleton before clipping to the pane.
const GRID_CELLS: usize = 6;

/// A block `percent` of `width` cells wide, never empty.
#[must_use]
pub fn block(width: usize, percent: usize) -> String {
    let len = (width * percent / 100).clamp(1, width.max(1));
    std::iter::repeat(SHADE).take(len).collect()
}

fn shade_style(theme: &Theme) -> String {
    format!("{}{}", Theme::dim(), theme.fg_token(ColorToken::TextTertiary))
}

/// Placeholder for the hero block and the sparkline under it.
///
/// # Returns
///
/// The next available row position (row + 4)
pub fn render_hero_skeleton(canvas: &mut Canvas, row: usize, theme: &Theme, cols: usize) -> usize {
    let room = cols.saturating_sub(2);
    let style = shade_style(theme);

    for (line, width) in [12, 22, 26].into_iter().enumerate() {
        canvas.position_cursor(row + line, 1);
        canvas.pad(1);
        canvas.push(&style);
        canvas.push(&block(width.min(room), 100));
        canvas.push(Theme::reset());
    }

    canvas.position_cursor(row + 3, 1);
    canvas.pad(1);
    canvas.push(&style);
    canvas.push(&block(room, 100));
    canvas.push(Theme::reset());

    row + 4
}

/// Placeholder for the stat card row: `count` cards with label, value and
/// trend lines at 80%, 60% and 40% of the card width.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_stats_skeleton(
    canvas: &mut Canvas,
    row: usize,
    count: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let count = count.max(1);
    let width = (cols.saturating_sub(1) / count).saturating_sub(1).max(2);
    let card_bg = theme.bg_token(ColorToken::Card);
    let style = shade_style(theme);

    for (line, percent) in [80, 60, 40].into_iter().enumerate() {
        canvas.position_cursor(row + line, 1);
        canvas.pad(1);
        for _ in 0..count {
            canvas.push(&card_bg);
            canvas.push(&style);
            canvas.push(&fit(&format!(" {}", block(width - 1, percent)), width));
            canvas.push(Theme::reset());
            canvas.pad(1);
        }
    }

    row + 3
}

/// Placeholder grid: six cards, `columns` per row, clipped to
/// `max_card_rows`. Each card has an image strip and title, subtitle and
/// price lines at 70%, 50% and 40% width.
///
/// # Returns
///
/// The row after the last card row.
pub fn render_grid_skeleton(
    canvas: &mut Canvas,
    row: usize,
    columns: usize,
    max_card_rows: usize,
    theme: &Theme,
) -> usize {
    let columns = columns.max(1);
    let inner = CARD_WIDTH - 2;
    let card_bg = theme.bg_token(ColorToken::Card);
    let style = shade_style(theme);
    let card_rows = ((GRID_CELLS + columns - 1) / columns).min(max_card_rows.max(1));
    let mut next = row;

    for card_row in 0..card_rows {
        let top = row + card_row * CARD_HEIGHT;
        let in_row = columns.min(GRID_CELLS - card_row * columns);
        for position in 0..in_row {
            let col = 2 + position * CARD_WIDTH;
            for (line, percent) in [100, 70, 50, 40].into_iter().enumerate() {
                canvas.position_cursor(top + line, col);
                canvas.push(&card_bg);
                canvas.push(&style);
                canvas.push("  ");
                canvas.push(&fit(&block(inner, percent), inner));
                canvas.push(Theme::reset());
            }
        }
        next = top + CARD_HEIGHT;
    }

    next
}

/// Placeholder comp cards, `slots` across, `card_width` cells each with a
/// one-cell gutter.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_comps_skeleton(
    canvas: &mut Canvas,
    row: usize,
    slots: usize,
    card_width: usize,
    theme: &Theme,
) -> usize {
    let inner = card_width.saturating_sub(2).max(1);
    let card_bg = theme.bg_token(ColorToken::Card);
    let style = shade_style(theme);

    for slot in 0..slots {
        let col = 2 + slot * (card_width + 1);
        for (line, percent) in [30, 90, 30].into_iter().enumerate() {
            canvas.position_cursor(row + line, col);
            canvas.push(&card_bg);
            canvas.push(&style);
            canvas.push(" ");
            canvas.push(&fit(&block(inner, percent), inner));
            canvas.push(" ");
            canvas.push(Theme::reset());
        }
    }

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::{display_width, strip_ansi};

    fn shade_count(text: &str) -> usize {
        text.chars().filter(|&c| c == SHADE).count()
    }

    #[test]
    fn blocks_scale_with_width() {
        assert_eq!(block(10, 70), "░░░░░░░");
        assert_eq!(block(10, 100).chars().count(), 10);
        assert_eq!(block(3, 10), "░");
        assert_eq!(block(0, 50), "░");
    }

    #[test]
    fn hero_skeleton_covers_hero_and_chart() {
        let mut canvas = Canvas::new();
        let next = render_hero_skeleton(&mut canvas, 5, &Theme::default(), 40);
        assert_eq!(next, 9);

        let text = strip_ansi(canvas.as_str());
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(shade_count(lines[0]), 12);
        assert_eq!(shade_count(lines[3]), 38);
        assert!(!text.contains('$'));
    }

    #[test]
    fn stats_skeleton_keeps_card_widths() {
        let mut canvas = Canvas::new();
        let next = render_stats_skeleton(&mut canvas, 10, 3, &Theme::default(), 61);
        assert_eq!(next, 13);

        let text = strip_ansi(canvas.as_str());
        for line in text.lines().filter(|l| !l.is_empty()) {
            // Leading pad plus three 19-cell cards, each followed by a gap.
            assert_eq!(display_width(line), 1 + 3 * 20);
        }
    }

    #[test]
    fn grid_skeleton_draws_six_cells() {
        let mut canvas = Canvas::new();
        let next = render_grid_skeleton(&mut canvas, 16, 2, 10, &Theme::default());
        assert_eq!(next, 16 + 3 * CARD_HEIGHT);
        // Six cards, four shaded lines each.
        let strips = strip_ansi(canvas.as_str())
            .lines()
            .filter(|l| l.contains(SHADE))
            .count();
        assert_eq!(strips, 6 * 4);
    }

    #[test]
    fn grid_skeleton_clips_to_the_pane() {
        let mut canvas = Canvas::new();
        let next = render_grid_skeleton(&mut canvas, 16, 1, 2, &Theme::default());
        assert_eq!(next, 16 + 2 * CARD_HEIGHT);
    }

    #[test]
    fn comps_skeleton_fills_each_slot() {
        let mut canvas = Canvas::new();
        assert_eq!(render_comps_skeleton(&mut canvas, 18, 2, 26, &Theme::default()), 21);
        let text = strip_ansi(canvas.as_str());
        assert_eq!(text.lines().filter(|l| l.contains(SHADE)).count(), 6);
    }
}
