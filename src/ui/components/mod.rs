//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at positions taken from
//! [`Layout`], so what is drawn and what the mouse hits always agree.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`table`]: Gallery rows
//! - [`empty`]: Message shown in place of an empty gallery
//! - [`status`]: Loading indicator, load-more control and advisories
//! - [`modal`]: Enlarged image overlay
//! - [`footer`]: Keybinding hints

mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod status;
mod table;

pub use status::LOAD_MORE_LABEL;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use search::render_search_bar;
use status::{render_advisory_line, render_status_line};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal separator. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame: chrome, gallery, status lines, then the modal on top.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, layout: &Layout) {
    let cols = layout.cols;

    render_header(Layout::HEADER_ROW, &vm.header, theme, cols);
    render_border(Layout::HEADER_ROW + 1, &theme.colors.border, cols);
    render_search_bar(layout.search_rect(), &vm.search_bar, theme);
    render_table_headers(Layout::TABLE_HEADER_ROW, theme, cols);

    if let Some(empty) = &vm.empty_state {
        if layout.gallery_capacity() >= 3 {
            render_empty_state(Layout::GALLERY_ROW + 1, empty, theme, cols);
        }
    } else {
        render_table_rows(Layout::GALLERY_ROW, &vm.display_items, theme, cols);
    }

    if let Some(status) = &vm.status {
        render_status_line(layout.status_row(), status, theme, cols);
    }
    if let Some(advisory) = &vm.advisory {
        render_advisory_line(layout.advisory_row(), advisory, theme, cols);
    }

    render_border(layout.border_row(), &theme.colors.border, cols);
    render_footer(layout.footer_row(), &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(layout.modal_rect(), modal, theme);
    }
}
