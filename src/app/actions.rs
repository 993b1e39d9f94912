//! Side effects for the plugin runtime to execute.
//!
//! The event handler returns a `Vec<Action>` per event; main.rs executes
//! them in order through host calls.

use crate::client::FetchRequest;

/// Commands the plugin runtime executes after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a GET through the host's web request API. The request context
    /// comes back with the result and identifies the ticket being settled.
    Fetch(FetchRequest),

    /// Sets a host timer; when it fires the oldest advisory expires.
    ScheduleAdvisoryExpiry {
        /// Delay before the timer fires.
        millis: u64,
    },
}
