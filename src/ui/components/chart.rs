//! Portfolio sparkline.

use crate::ui::helpers::Canvas;
use crate::ui::styles::ColorToken;
use crate::ui::theme::Theme;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders the portfolio series as a one-line sparkline.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_chart(
    canvas: &mut Canvas,
    row: usize,
    values: &[f64],
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(1);
    canvas.colored(
        theme,
        ColorToken::GainGreenSoft,
        &sparkline(values, cols.saturating_sub(2)),
    );
    row + 1
}

/// Resamples `values` to `width` cells and maps each to a block height.
///
/// A flat series renders at mid height; an empty series renders nothing.
#[must_use]
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = BLOCKS.len() - 1;

    (0..width)
        .map(|i| {
            let index = if width == 1 {
                values.len() - 1
            } else {
                i * (values.len() - 1) / (width - 1)
            };
            if span <= f64::EPSILON {
                return BLOCKS[top / 2];
            }
            let ratio = (values[index] - min) / span;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let level = (ratio * top as f64).round() as usize;
            BLOCKS[level.min(top)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::display_width;

    #[test]
    fn rising_series_ends_at_the_top() {
        let line = sparkline(&[1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(line, "▁▃▆█");
    }

    #[test]
    fn resamples_to_width() {
        let values: Vec<f64> = (0..25).map(f64::from).collect();
        let line = sparkline(&values, 60);
        assert_eq!(display_width(&line), 60);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(sparkline(&[], 10), "");
        assert_eq!(sparkline(&[5.0, 5.0], 3), "▄▄▄");
        assert_eq!(sparkline(&[1.0, 9.0], 1), "█");
    }
}
