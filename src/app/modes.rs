//! Input focus state.
//!
//! Focus decides how key presses are interpreted:
//! - **`SearchBar`**: printable keys edit the query, Enter submits
//! - **Gallery**: j/k move the selection, Enter opens the modal, m loads more
//!
//! While the modal is open it captures input regardless of focus; see
//! [`handle_event`](super::handle_event).

/// Which control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the search field. Initial focus.
    #[default]
    SearchBar,
    /// Navigating the result list.
    Gallery,
}
