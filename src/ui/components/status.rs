//! Status line (loading indicator, load-more control) and advisory line.

use crate::domain::AdvisoryKind;
use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AdvisoryLine, StatusLine};

/// Label of the clickable load-more control.
pub const LOAD_MORE_LABEL: &str = "[ Load more ]";

pub fn render_status_line(row: usize, status: &StatusLine, theme: &Theme, cols: usize) {
    let (text, color, emphasis) = match status {
        StatusLine::Loading { query, page } => (
            format!("Loading page {page} of \"{query}\"..."),
            &theme.colors.loading_fg,
            Theme::dim(),
        ),
        StatusLine::LoadMore { shown, total } => (
            format!("{LOAD_MORE_LABEL}  {shown} of {total} shown"),
            &theme.colors.load_more_fg,
            Theme::bold(),
        ),
    };
    render_centered(row, &text, color, emphasis, cols);
}

pub fn render_advisory_line(row: usize, advisory: &AdvisoryLine, theme: &Theme, cols: usize) {
    let color = match advisory.kind {
        AdvisoryKind::Info => &theme.colors.advisory_info_fg,
        AdvisoryKind::Warning => &theme.colors.advisory_warning_fg,
        AdvisoryKind::Error => &theme.colors.advisory_error_fg,
    };
    render_centered(row, &advisory.message, color, Theme::bold(), cols);
}

fn render_centered(row: usize, text: &str, color: &str, emphasis: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let padding = center_offset(len, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{emphasis}");
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}
