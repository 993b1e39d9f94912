//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the search
//! input, the orchestrator's result store, gallery selection, the modal,
//! advisories and the current screen layout. View models are computed on
//! demand from it.

use super::modes::Focus;
use crate::client::PixabayClient;
use crate::domain::{Advisories, ImageItem};
use crate::gallery::{EscapeListeners, ModalState};
use crate::search::{Orchestrator, SearchInput, SearchStatus};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AdvisoryLine, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ModalInfo, SearchBarInfo,
    StatusLine, UIViewModel,
};

const TITLE: &str = "Pixabay Gallery";
const PLACEHOLDER: &str = "Search images and photos";

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event); the renderer
/// reads it through [`compute_viewmodel`](Self::compute_viewmodel). Nothing
/// here is global, so tests build as many independent instances as they need.
#[derive(Debug)]
pub struct AppState {
    /// Search bar buffer.
    pub search: SearchInput,

    /// Current query, page, accumulated results and fetch status.
    pub orchestrator: Orchestrator,

    /// Builds the web requests for tickets issued by the orchestrator.
    pub client: PixabayClient,

    /// Zero-based index into `orchestrator.items()`. Wraps during navigation.
    ///
    /// Reset to 0 when a first page replaces the results, clamped when the
    /// list shrinks.
    pub selected_index: usize,

    /// Which part of the screen receives keyboard input.
    ///
    /// Starts on the search bar and moves to the gallery after a successful
    /// submit.
    pub focus: Focus,

    /// Enlarged view of the selected image, if open.
    pub modal: ModalState,

    /// Escape listener registry the modal acquires from.
    pub listeners: EscapeListeners,

    /// Queued transient notifications; the newest one is displayed.
    pub advisories: Advisories,

    /// Color scheme for UI rendering, resolved once at load.
    pub theme: Theme,

    /// Geometry of the last render, used for mouse hit-testing.
    pub layout: Layout,
}

impl AppState {
    /// Creates an idle state with an empty search bar and no results.
    ///
    /// # Parameters
    ///
    /// * `client` - Query client used to turn tickets into web requests
    /// * `theme` - Color scheme for UI rendering
    ///
    /// # Example
    ///
    /// ```
    /// use pixzel::{AppState, Focus, PixabayClient, Theme};
    ///
    /// let state = AppState::new(PixabayClient::default(), Theme::default());
    /// assert_eq!(state.focus, Focus::SearchBar);
    /// assert!(state.orchestrator.items().is_empty());
    /// ```
    #[must_use]
    pub fn new(client: PixabayClient, theme: Theme) -> Self {
        Self {
            search: SearchInput::new(),
            orchestrator: Orchestrator::new(),
            client,
            selected_index: 0,
            focus: Focus::default(),
            modal: ModalState::new(),
            listeners: EscapeListeners::new(),
            advisories: Advisories::new(),
            theme,
            layout: Layout::default(),
        }
    }

    /// Moves the selection down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.orchestrator.items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.orchestrator.items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the image under the selection cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.orchestrator.items().get(self.selected_index)
    }

    /// Keeps the selection inside the result list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.orchestrator.items().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Selects the item shown on the given visible gallery row.
    ///
    /// Returns `false` if the row is past the end of the list.
    pub fn select_visible_row(&mut self, offset: usize) -> bool {
        let (start, end) = self
            .layout
            .gallery_window(self.selected_index, self.orchestrator.items().len());
        let index = start + offset;
        if index >= end {
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Computes the view model for the current layout.
    ///
    /// The gallery shows the window of results that fits
    /// [`Layout::gallery_capacity`] and contains the selection. The status
    /// line shows either the loading indicator or the load-more control,
    /// never both.
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] with header, search bar, visible rows, status,
    /// advisory, empty state, modal and footer. The `selected_index` in it
    /// is relative to the visible window.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let items = self.orchestrator.items();
        let (start, end) = self.layout.gallery_window(self.selected_index, items.len());

        let display_items: Vec<DisplayItem> = items[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = start + relative_idx;
                DisplayItem {
                    position: absolute_idx + 1,
                    id: item.id,
                    tags: item.tags.clone(),
                    preview_url: item.preview_url.clone(),
                    is_selected: absolute_idx == self.selected_index,
                }
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            display_items,
            selected_index: self.selected_index.saturating_sub(start),
            status: self.compute_status(),
            advisory: self.advisories.current().map(|advisory| AdvisoryLine {
                kind: advisory.kind,
                message: advisory.message.clone(),
            }),
            empty_state: self.compute_empty_state(),
            modal: self.modal.session().map(|session| ModalInfo {
                tags: session.tags.clone(),
                full_url: session.full_url.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let query = self.orchestrator.query();
        let title = match self.orchestrator.total_count() {
            _ if query.is_empty() => format!(" {TITLE} "),
            Some(total) if total > 0 => format!(
                " {TITLE}: {query} ({} of {total}) ",
                self.orchestrator.items().len()
            ),
            _ => format!(" {TITLE}: {query} "),
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search.buffer().to_string(),
            placeholder: PLACEHOLDER.to_string(),
            is_focused: self.focus == Focus::SearchBar && !self.modal.is_visible(),
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if self.orchestrator.is_loading() {
            return Some(StatusLine::Loading {
                query: self.orchestrator.query().to_string(),
                page: self.orchestrator.page(),
            });
        }
        if self.orchestrator.is_load_more_visible() {
            return self
                .orchestrator
                .total_count()
                .map(|total| StatusLine::LoadMore {
                    shown: self.orchestrator.items().len(),
                    total,
                });
        }
        None
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.orchestrator.items().is_empty() {
            return None;
        }
        let query = self.orchestrator.query();

        let (message, subtitle) = if self.orchestrator.is_loading() {
            (
                format!("Searching for \"{query}\""),
                "Results appear as soon as they arrive".to_string(),
            )
        } else if self.orchestrator.status() == SearchStatus::Failed {
            (
                "Something went wrong".to_string(),
                self.orchestrator
                    .last_error()
                    .map_or_else(String::new, ToString::to_string),
            )
        } else if self.orchestrator.total_count() == Some(0) {
            (
                "No images found".to_string(),
                format!("Nothing matches \"{query}\", try another query"),
            )
        } else {
            (
                PLACEHOLDER.to_string(),
                "Type a query and press Enter".to_string(),
            )
        };

        Some(EmptyState { message, subtitle })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal.is_visible() {
            "Esc: close  Click outside: close"
        } else {
            match self.focus {
                Focus::SearchBar => "Enter: search  Tab/Esc: results  Type to edit query",
                Focus::Gallery => {
                    "j/k: navigate  Enter: enlarge  m: load more  /: search  q: hide"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Advisory, SearchPage};

    fn state_with_results(count: u64, total: u32) -> AppState {
        let mut state = AppState::new(PixabayClient::default(), Theme::default());
        let ticket = state.orchestrator.submit("cats".to_string()).unwrap();
        let items = (1..=count)
            .map(|id| {
                ImageItem::new(
                    id,
                    format!("cat {id}"),
                    format!("https://cdn/{id}_640.jpg"),
                    format!("https://cdn/{id}_1280.jpg"),
                )
            })
            .collect();
        state.orchestrator.settle(
            &ticket,
            Ok(SearchPage {
                items,
                total_count: total,
            }),
        );
        state
    }

    #[test]
    fn initial_viewmodel_invites_a_search() {
        let state = AppState::new(PixabayClient::default(), Theme::default());
        let vm = state.compute_viewmodel();

        assert_eq!(vm.header.title, " Pixabay Gallery ");
        assert!(vm.search_bar.is_focused);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.status, None);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("Search images and photos".to_string())
        );
        assert_eq!(vm.modal, None);
    }

    #[test]
    fn results_fill_the_window_and_offer_load_more() {
        let state = state_with_results(12, 40);
        let vm = state.compute_viewmodel();

        assert_eq!(vm.display_items.len(), 12);
        assert!(vm.display_items[0].is_selected);
        assert_eq!(vm.display_items[11].position, 12);
        assert_eq!(vm.header.title, " Pixabay Gallery: cats (12 of 40) ");
        assert_eq!(vm.status, Some(StatusLine::LoadMore { shown: 12, total: 40 }));
        assert_eq!(vm.empty_state, None);
    }

    #[test]
    fn loading_replaces_load_more() {
        let mut state = state_with_results(12, 40);
        state.orchestrator.load_more().unwrap();

        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.status,
            Some(StatusLine::Loading {
                query: "cats".to_string(),
                page: 2
            })
        );
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with_results(3, 3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item().map(|i| i.id), Some(1));
    }

    #[test]
    fn visible_row_selection_respects_the_window() {
        let mut state = state_with_results(24, 40);
        state.layout = Layout::new(24, 80);
        state.selected_index = 23;

        assert!(state.select_visible_row(0));
        assert_eq!(state.selected_index, 12);

        let mut short = state_with_results(3, 3);
        assert!(!short.select_visible_row(5));
        assert_eq!(short.selected_index, 0);
    }

    #[test]
    fn advisory_and_modal_reach_the_viewmodel() {
        let mut state = state_with_results(2, 2);
        state.advisories.raise(Advisory::info("No images found!"));
        state
            .modal
            .open("https://cdn/1_1280.jpg".into(), "cat 1".into(), &state.listeners);

        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.advisory.map(|a| a.message),
            Some("No images found!".to_string())
        );
        assert_eq!(
            vm.modal,
            Some(ModalInfo {
                tags: "cat 1".to_string(),
                full_url: "https://cdn/1_1280.jpg".to_string()
            })
        );
        assert_eq!(vm.footer.keybindings, "Esc: close  Click outside: close");
    }

    #[test]
    fn zero_hits_show_the_no_results_state() {
        let state = state_with_results(0, 0);
        let vm = state.compute_viewmodel();

        assert_eq!(vm.status, None);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No images found".to_string())
        );
    }
}
