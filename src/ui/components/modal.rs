//! Modal overlay showing the enlarged image's details.
//!
//! ```text
//! ┌──────────────── Image ────────────────┐
//! │                                       │
//! │  yellow, flower, garden               │
//! │                                       │
//! │  https://pixabay.com/get/..._1280.jpg │
//! │                                       │
//! │                                       │
//! │      Esc or click outside to close    │
//! └───────────────────────────────────────┘
//! ```

use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const TITLE: &str = " Image ";
const HINT: &str = "Esc or click outside to close";
const TEXT_INDENT: usize = 2;

pub fn render_modal(rect: Rect, modal: &ModalInfo, theme: &Theme) {
    if rect.width < 4 || rect.height < 3 {
        return;
    }
    let inner_width = rect.width - 2;
    let text_width_max = inner_width.saturating_sub(TEXT_INDENT * 2);

    let title = truncate(TITLE, inner_width);
    let title_offset = center_offset(text_width(&title), inner_width);
    position_cursor(rect.row, rect.col);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("┌{}", "─".repeat(title_offset));
    print!("{}{title}", Theme::bold());
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!(
        "{}┐",
        "─".repeat(inner_width.saturating_sub(title_offset + text_width(&title)))
    );
    print!("{}", Theme::reset());

    let url_lines = wrap(&modal.full_url, text_width_max, 2);
    let mut body: Vec<(String, bool)> = vec![
        (String::new(), false),
        (truncate(&modal.tags, text_width_max), true),
        (String::new(), false),
    ];
    body.extend(url_lines.into_iter().map(|line| (line, false)));

    let inner_rows = rect.height - 2;
    for offset in 0..inner_rows {
        let row = rect.row + 1 + offset;
        position_cursor(row, rect.col);
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("│");
        if let Some(bg) = &theme.colors.modal_bg {
            print!("{}", Theme::bg(bg));
        }

        let is_hint_row = offset + 1 == inner_rows;
        let (text, is_bold, indent) = if is_hint_row {
            let hint = truncate(HINT, inner_width);
            let indent = center_offset(text_width(&hint), inner_width);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            (hint, false, indent)
        } else {
            let (line, is_bold) = body.get(offset).cloned().unwrap_or_default();
            print!("{}", Theme::fg(&theme.colors.text_normal));
            (line, is_bold, TEXT_INDENT)
        };

        print!("{}", " ".repeat(indent));
        if is_bold {
            print!("{}", Theme::bold());
        }
        print!("{text}");
        print!(
            "{}",
            " ".repeat(inner_width.saturating_sub(indent + text_width(&text)))
        );
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(rect.row + rect.height - 1, rect.col);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Splits `text` into at most `max_lines` chunks of `width` chars; the last
/// chunk is truncated if the text does not fit.
fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = chars
        .chunks(width)
        .take(max_lines)
        .map(|chunk| chunk.iter().collect())
        .collect();

    if chars.len() > width * max_lines {
        if let Some(last) = lines.last_mut() {
            let tail: String = chars[width * (max_lines - 1)..].iter().collect();
            *last = truncate(&tail, width);
        }
    }
    lines
}
