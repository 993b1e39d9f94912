//! Search bar component renderer.
//!
//! ```text
//! [margin] ┌──────────────────────────┐ [margin]
//! [margin] │ Search: yellow flowers█  │ [margin]
//! [margin] └──────────────────────────┘ [margin]
//! ```

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const PROMPT: &str = " Search: ";
const CURSOR: &str = "█";

/// Renders the three-line search box inside `rect`.
///
/// The border takes the focus color while typing. An empty, unfocused box
/// shows the placeholder instead of the query.
pub fn render_search_bar(rect: Rect, search: &SearchBarInfo, theme: &Theme) -> usize {
    let inner_width = rect.width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(rect.row, rect.col);
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(rect.row + 1, rect.col);
    print!("{}", Theme::fg(border_color));
    print!("│");

    let room = inner_width.saturating_sub(text_width(PROMPT) + 1);
    let used = if search.query.is_empty() && !search.is_focused {
        let placeholder = truncate(&search.placeholder, room);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{PROMPT}{placeholder}");
        text_width(PROMPT) + text_width(&placeholder)
    } else {
        // Keep the tail of long queries visible, where the cursor is.
        let skip = text_width(&search.query).saturating_sub(room);
        let visible: String = search.query.chars().skip(skip).collect();
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{PROMPT}{visible}");
        let mut used = text_width(PROMPT) + text_width(&visible);
        if search.is_focused {
            print!("{}", Theme::fg(&theme.colors.search_bar_focus));
            print!("{CURSOR}");
            used += 1;
        }
        used
    };

    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(rect.row + 2, rect.col);
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    rect.row + rect.height
}
