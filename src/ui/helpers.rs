//! Shared rendering utilities.

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text`, counting one cell per `char`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` chars, ending in `...` when shortened.
///
/// ```
/// use pixzel::ui::helpers::truncate;
///
/// assert_eq!(truncate("yellow, flower, garden", 12), "yellow, f...");
/// assert_eq!(truncate("cat", 12), "cat");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

/// Left padding that centers `width` cells in `cols`.
#[must_use]
pub const fn center_offset(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}
