//! Enlarged-image modal.
//!
//! The modal has its own lifecycle, independent of the search state: it opens
//! on item selection and closes on Escape, a backdrop click or an explicit
//! close. While open it holds an Escape listener registration.

use super::listeners::{EscapeGuard, EscapeListeners};

/// An open modal: what it shows and its Escape listener.
#[derive(Debug)]
pub struct ModalSession {
    /// Large rendition URL.
    pub full_url: String,
    /// Tags of the selected image.
    pub tags: String,
    _escape: EscapeGuard,
}

/// Modal visibility and content.
#[derive(Debug, Default)]
pub struct ModalState {
    session: Option<ModalSession>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&ModalSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn full_url(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.full_url.as_str())
    }

    #[must_use]
    pub fn tags(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.tags.as_str())
    }

    /// Shows the modal for an image, registering an Escape listener.
    ///
    /// Opening over an already open modal replaces its content; the previous
    /// listener is released first.
    pub fn open(&mut self, full_url: String, tags: String, listeners: &EscapeListeners) {
        self.session = None;
        tracing::debug!(full_url = %full_url, tags = %tags, "modal opened");
        self.session = Some(ModalSession {
            full_url,
            tags,
            _escape: listeners.acquire(),
        });
    }

    /// Hides the modal and releases its Escape listener.
    ///
    /// Returns `false` if it was not open.
    pub fn close(&mut self) -> bool {
        let was_open = self.session.take().is_some();
        if was_open {
            tracing::debug!("modal closed");
        }
        was_open
    }
}
