//! Transient user-facing notifications.
//!
//! Advisories are short messages ("No images found!", "Type something in the
//! search field") shown for a fixed duration without blocking input. They are
//! kept in a FIFO queue: every raise asks the host for one timer of
//! [`ADVISORY_DURATION_MS`], and since timers fire in the order they were
//! set, each timer event expires the oldest advisory.

use std::collections::VecDeque;

/// How long an advisory stays on screen, in milliseconds.
pub const ADVISORY_DURATION_MS: u64 = 2500;

/// Severity of an advisory, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    /// Neutral outcome, such as a query with no matches.
    Info,
    /// Rejected input: empty or repeated query.
    Warning,
    /// A fetch failed.
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Severity, used to pick the color.
    pub kind: AdvisoryKind,
    /// Text shown on the advisory line.
    pub message: String,
}

impl Advisory {
    /// Creates an [`AdvisoryKind::Info`] advisory.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Info,
            message: message.into(),
        }
    }

    /// Creates an [`AdvisoryKind::Warning`] advisory.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Warning,
            message: message.into(),
        }
    }

    /// Creates an [`AdvisoryKind::Error`] advisory.
    ///
    /// ```
    /// use pixzel::domain::{Advisory, AdvisoryKind};
    ///
    /// let advisory = Advisory::error("Something went wrong: HTTP 500");
    /// assert_eq!(advisory.kind, AdvisoryKind::Error);
    /// ```
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Error,
            message: message.into(),
        }
    }
}

/// FIFO queue of advisories waiting for their timer to expire.
#[derive(Debug, Clone, Default)]
pub struct Advisories {
    queue: VecDeque<Advisory>,
}

impl Advisories {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an advisory. The caller is responsible for scheduling the
    /// matching expiry timer.
    pub fn raise(&mut self, advisory: Advisory) {
        tracing::debug!(kind = ?advisory.kind, message = %advisory.message, "advisory raised");
        self.queue.push_back(advisory);
    }

    /// Drops the oldest advisory. Returns it, or `None` if the queue was empty.
    pub fn expire_oldest(&mut self) -> Option<Advisory> {
        self.queue.pop_front()
    }

    /// The advisory to display: the most recently raised one.
    #[must_use]
    pub fn current(&self) -> Option<&Advisory> {
        self.queue.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
