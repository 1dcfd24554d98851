//! Composable UI component renderers.
//!
//! Each component draws one part of a screen into a [`Canvas`] and returns
//! the next free row, so screen layouts read as a top-to-bottom sequence.
//!
//! # Components
//!
//! - [`header`]: Tab bar and screen title
//! - [`footer`]: Keybinding hints
//! - [`hero`]: Total collection value and ROI
//! - [`chart`]: Portfolio sparkline
//! - [`stats`]: Stat card row
//! - [`chips`]: Filter chips
//! - [`grid`]: Collection cards
//! - [`scan_frame`]: Camera frame and overlay state
//! - [`scan_button`]: Scan button and its hint
//! - [`error_card`]: Inline scan error
//! - [`comp_card`]: Comparable listing cards
//! - [`skeleton`]: Loading placeholders
//! - [`empty`]: Empty state message
//!
//! # Layouts
//!
//! - [`render_collection_screen`]: Tabs + Header + Hero + Chart + Stats + Chips + Grid + Footer
//! - [`render_scan_screen`]: Tabs + Header + Frame + Error + Comps + Button + Footer
//! - [`render_sell_screen`]: Tabs + Header + Empty state + Footer

pub mod chart;
mod chips;
pub mod comp_card;
mod empty;
mod error_card;
mod footer;
pub mod grid;
mod header;
mod hero;
pub mod scan_button;
pub mod scan_frame;
pub mod skeleton;
mod stats;

pub use empty::render_empty_state;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CollectionView, ScanView, SellView, UIViewModel};

use chart::render_chart;
use chips::render_chips;
use comp_card::{render_comps, COMPS_HEIGHT};
use error_card::render_error_card;
use footer::render_footer;
use grid::{render_grid, CARD_HEIGHT};
use header::{render_header, render_tab_bar};
use hero::render_hero;
use scan_button::render_scan_button;
use scan_frame::render_scan_frame;
use skeleton::{render_grid_skeleton, render_hero_skeleton, render_stats_skeleton};
use stats::render_stat_cards;

/// Draws the tab bar, the screen title and a separator.
///
/// # Returns
///
/// The first row available to screen content.
fn render_chrome(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut row = render_tab_bar(canvas, 1, &vm.tabs, theme, cols);
    row = render_header(canvas, row, &vm.header, theme, cols);
    canvas.rule(row, theme, cols);
    row + 1
}

/// Renders the "My Finds" layout.
///
/// Layout structure:
/// ```text
/// [Tabs]
/// [Title / Subtitle]
/// [Border]
/// [Hero - 3 lines]
/// [Sparkline]
///
/// [Stat cards - 3 lines]
///
/// [Filter chips]
///
/// [Card grid or empty state]
/// [Border]
/// [Footer]
/// ```
///
/// While loading, the hero, sparkline, stat cards and grid are drawn as
/// placeholders of the same size.
pub fn render_collection_screen(
    canvas: &mut Canvas,
    vm: &UIViewModel,
    view: &CollectionView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let mut row = render_chrome(canvas, vm, theme, cols);

    if view.loading {
        row = render_hero_skeleton(canvas, row, theme, cols);
        row = render_stats_skeleton(canvas, row + 1, view.stats.len(), theme, cols);
        row = render_chips(canvas, row + 1, &view.chips, theme, cols);
        let card_rows = rows.saturating_sub(row + 2) / CARD_HEIGHT;
        render_grid_skeleton(canvas, row + 1, view.columns, card_rows, theme);
        render_footer(canvas, &vm.footer, theme, rows, cols);
        return;
    }

    row = render_hero(canvas, row, &view.hero, theme);
    row = render_chart(canvas, row, &view.chart, theme, cols);
    row = render_stat_cards(canvas, row + 1, &view.stats, theme, cols);
    row = render_chips(canvas, row + 1, &view.chips, theme, cols);

    match &view.empty_state {
        Some(empty) => {
            render_empty_state(canvas, row + 2, empty, theme, cols);
        }
        None => {
            render_grid(canvas, row + 1, &view.cards, view.columns, theme);
        }
    }

    render_footer(canvas, &vm.footer, theme, rows, cols);
}

/// Renders the camera layout.
///
/// The scan button is pinned just above the footer. An error card and the
/// comparable listings, when present, sit between the frame and the button;
/// the listings are left out if they would push the button down.
pub fn render_scan_screen(
    canvas: &mut Canvas,
    vm: &UIViewModel,
    view: &ScanView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let mut row = render_chrome(canvas, vm, theme, cols);
    row = render_scan_frame(
        canvas,
        row + 1,
        view.overlay,
        view.flash_on,
        &view.guidance,
        theme,
        cols,
    );

    if let Some(error) = &view.error {
        row = render_error_card(canvas, row + 1, error, theme, cols);
    }

    if let Some(comps) = &view.comps {
        if row + 1 + COMPS_HEIGHT <= rows.saturating_sub(3) {
            row = render_comps(canvas, row + 1, comps, theme, cols);
        }
    }

    let button_row = (row + 1).max(rows.saturating_sub(3));
    render_scan_button(canvas, button_row, view.button, theme, cols);
    render_footer(canvas, &vm.footer, theme, rows, cols);
}

/// Renders the listings layout: an empty state centered in the pane.
pub fn render_sell_screen(
    canvas: &mut Canvas,
    vm: &UIViewModel,
    view: &SellView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let row = render_chrome(canvas, vm, theme, cols);
    let middle = (rows / 2).saturating_sub(2).max(row + 1);
    render_empty_state(canvas, middle, &view.empty_state, theme, cols);
    render_footer(canvas, &vm.footer, theme, rows, cols);
}
