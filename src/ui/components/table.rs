//! Gallery table renderer: one row per image hit.
//!
//! ```text
//!    #  ID          TAGS                                PREVIEW
//!    1  1234567     cat, kitten, pet                    https://cdn.pixabay.com/...
//! ```

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const POSITION_WIDTH: usize = 4;
const ID_WIDTH: usize = 10;
const TAGS_WIDTH: usize = 34;

/// Renders the column headers. Returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let line = format!(
        "{:>POSITION_WIDTH$}  {:<ID_WIDTH$}  {:<TAGS_WIDTH$}  PREVIEW",
        "#", "ID", "TAGS"
    );
    let line = truncate(&line, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&line))));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item on consecutive rows. Returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// The selected row is filled edge to edge with the selection colors.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let fixed = POSITION_WIDTH + ID_WIDTH + TAGS_WIDTH + 6;
    let preview = truncate(&item.preview_url, cols.saturating_sub(fixed));
    let line = format!(
        "{:>POSITION_WIDTH$}  {:<ID_WIDTH$}  {:<TAGS_WIDTH$}  {preview}",
        item.position,
        item.id,
        truncate(&item.tags, TAGS_WIDTH),
    );
    let line = truncate(&line, cols);

    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&line))));

    print!("{}", Theme::reset());
    row + 1
}
