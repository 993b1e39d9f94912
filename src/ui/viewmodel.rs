//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncation, selection
//! marking and status wording are all decided before rendering starts.

use crate::domain::AdvisoryKind;

/// Complete UI view model for one frame.
///
/// Computed from `AppState` for the current layout. Optional parts are drawn
/// only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title line, including the current query and result counts.
    pub header: HeaderInfo,

    /// Search box contents and focus.
    pub search_bar: SearchBarInfo,

    /// Gallery rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Loading indicator or load-more control, if either applies.
    pub status: Option<StatusLine>,

    /// Newest queued advisory.
    pub advisory: Option<AdvisoryLine>,

    /// Replaces the gallery rows when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Drawn over everything else when present.
    pub modal: Option<ModalInfo>,

    /// Keybinding help for the current focus.
    pub footer: FooterInfo,
}

/// One row of the gallery table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based position in the accumulated result list.
    pub position: usize,

    /// Provider image id.
    pub id: u64,

    /// Comma-separated tags, untruncated.
    pub tags: String,

    /// Small rendition URL.
    pub preview_url: String,

    /// Whether this row is under the selection cursor.
    pub is_selected: bool,
}

/// Header information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, padded with a space on each side.
    pub title: String,
}

/// Footer information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search box state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text typed so far.
    pub query: String,

    /// Shown dimmed while `query` is empty.
    pub placeholder: String,

    /// Whether keys currently go to the search box.
    pub is_focused: bool,
}

/// What the status line under the gallery shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// A fetch is in flight.
    Loading {
        /// Query being fetched.
        query: String,
        /// Page being fetched.
        page: u32,
    },
    /// More pages are available; clicking the line or `m` loads the next.
    LoadMore {
        /// Items currently listed.
        shown: usize,
        /// Provider-reported total.
        total: u32,
    },
}

/// Advisory line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryLine {
    /// Severity, used to pick the color.
    pub kind: AdvisoryKind,

    /// Advisory text.
    pub message: String,
}

/// Placeholder shown when the gallery has no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Main message.
    pub message: String,

    /// Hint rendered dimmed below the message.
    pub subtitle: String,
}

/// Enlarged view of the selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    /// Tags, word-wrapped inside the box.
    pub tags: String,

    /// Large rendition URL.
    pub full_url: String,
}
