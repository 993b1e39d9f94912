//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! All coordinates are 1-indexed, matching ANSI cursor positioning.
//!
//! ```text
//! row 1              [blank]
//! row 2              header
//! row 3              border
//! rows 4-6           search box
//! row 7              table headers
//! rows 8..status     gallery rows
//! rows - 4           status line (loading / load more)
//! rows - 3           advisory line
//! rows - 2           border
//! rows - 1           footer
//! ```

/// Left and right margin of the search box.
pub const SEARCH_BOX_MARGIN: usize = 5;

/// Height of the modal box, borders included.
const MODAL_HEIGHT: usize = 9;
/// Widest the modal box gets on large terminals.
const MODAL_MAX_WIDTH: usize = 100;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }
}

/// Which part of the screen a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchBar,
    /// A gallery row, as an offset from the first visible row.
    GalleryRow(usize),
    StatusLine,
    Elsewhere,
}

/// Geometry for a terminal of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl Layout {
    pub const HEADER_ROW: usize = 2;
    pub const SEARCH_ROW: usize = 4;
    pub const SEARCH_HEIGHT: usize = 3;
    pub const TABLE_HEADER_ROW: usize = 7;
    pub const GALLERY_ROW: usize = 8;

    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn status_row(&self) -> usize {
        self.rows.saturating_sub(4)
    }

    #[must_use]
    pub const fn advisory_row(&self) -> usize {
        self.rows.saturating_sub(3)
    }

    #[must_use]
    pub const fn border_row(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Number of gallery rows that fit between the table headers and the
    /// status line.
    #[must_use]
    pub const fn gallery_capacity(&self) -> usize {
        self.status_row().saturating_sub(Self::GALLERY_ROW)
    }

    /// The search box, borders included.
    #[must_use]
    pub const fn search_rect(&self) -> Rect {
        Rect {
            row: Self::SEARCH_ROW,
            col: SEARCH_BOX_MARGIN + 1,
            width: self.cols.saturating_sub(SEARCH_BOX_MARGIN * 2),
            height: Self::SEARCH_HEIGHT,
        }
    }

    /// The modal box, centered on screen.
    #[must_use]
    pub fn modal_rect(&self) -> Rect {
        let width = self.cols.saturating_sub(8).min(MODAL_MAX_WIDTH);
        let height = MODAL_HEIGHT.min(self.rows);
        Rect {
            row: self.rows.saturating_sub(height) / 2 + 1,
            col: self.cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    /// Visible window `[start, end)` over `len` items, keeping `selected`
    /// near the middle and the window full when possible.
    #[must_use]
    pub fn gallery_window(&self, selected: usize, len: usize) -> (usize, usize) {
        let available = self.gallery_capacity();

        let mut start = selected.saturating_sub(available / 2);
        let end = (start + available).min(len);

        if end - start.min(end) < available && len >= available {
            start = end.saturating_sub(available);
        }

        (start.min(end), end)
    }

    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Region {
        if self.search_rect().contains(row, col) {
            return Region::SearchBar;
        }
        if row >= Self::GALLERY_ROW && row < self.status_row() {
            return Region::GalleryRow(row - Self::GALLERY_ROW);
        }
        if row == self.status_row() && row > 0 {
            return Region::StatusLine;
        }
        Region::Elsewhere
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_standard_terminal_fits_one_page_of_results() {
        let layout = Layout::new(24, 80);
        assert_eq!(layout.status_row(), 20);
        assert_eq!(layout.gallery_capacity(), 12);
        assert_eq!(layout.footer_row(), 23);
    }

    #[test]
    fn window_follows_selection_and_stays_full_at_the_end() {
        let layout = Layout::new(24, 80);

        assert_eq!(layout.gallery_window(0, 5), (0, 5));
        assert_eq!(layout.gallery_window(0, 24), (0, 12));
        assert_eq!(layout.gallery_window(15, 24), (9, 21));
        assert_eq!(layout.gallery_window(23, 24), (12, 24));
    }

    #[test]
    fn hit_test_maps_rows_to_regions() {
        let layout = Layout::new(24, 80);

        assert_eq!(layout.hit_test(5, 10), Region::SearchBar);
        assert_eq!(layout.hit_test(5, 2), Region::Elsewhere);
        assert_eq!(layout.hit_test(8, 1), Region::GalleryRow(0));
        assert_eq!(layout.hit_test(19, 40), Region::GalleryRow(11));
        assert_eq!(layout.hit_test(20, 40), Region::StatusLine);
        assert_eq!(layout.hit_test(23, 40), Region::Elsewhere);
    }

    #[test]
    fn modal_is_centered_and_contains_only_its_cells() {
        let layout = Layout::new(24, 80);
        let rect = layout.modal_rect();

        assert_eq!(rect, Rect { row: 8, col: 5, width: 72, height: 9 });
        assert!(rect.contains(8, 5));
        assert!(rect.contains(16, 76));
        assert!(!rect.contains(7, 40));
        assert!(!rect.contains(17, 40));
        assert!(!rect.contains(12, 4));
        assert!(!rect.contains(12, 77));
    }
}
