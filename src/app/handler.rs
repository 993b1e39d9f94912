//! Event handling and state transitions.
//!
//! # Architecture
//!
//! 1. main.rs translates host events (keys, mouse, web results, timers) into
//!    [`Event`]s
//! 2. [`handle_event`] mutates [`AppState`]
//! 3. The returned actions are executed by main.rs as host calls
//!
//! # Escape handling
//!
//! Escape is offered to the listener registry first: while the modal holds a
//! registration, Escape closes it and does nothing else. Only with no
//! listener registered does Escape fall through to focus handling.
//!
//! # Mouse handling
//!
//! While the modal is open, a click outside its box closes it and a click
//! inside does nothing. Otherwise clicks are hit-tested against the same
//! [`Layout`](crate::ui::Layout) the renderer draws with.

use crate::app::{Action, AppState, Focus};
use crate::client::{parse_response, RequestTicket};
use crate::domain::{Advisory, Result, SearchError, ADVISORY_DURATION_MS};
use crate::search::Settlement;
use crate::ui::layout::Region;
use std::collections::BTreeMap;

/// Advisory shown when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No images found!";

/// Events triggered by user input or host callbacks.
///
/// main.rs chooses the variant from the key and the current [`Focus`], so
/// most variants assume the matching focus. The handler still checks focus
/// and the modal before acting, and ignores an event that does not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search buffer.
    Char(char),
    /// Removes the last character from the search buffer.
    Backspace,
    /// Submits the search buffer as a new query.
    Submit,
    /// Moves keyboard focus to the search bar.
    FocusSearch,
    /// Moves keyboard focus to the gallery.
    FocusGallery,
    /// Moves the gallery selection down (wraps to top).
    KeyDown,
    /// Moves the gallery selection up (wraps to bottom).
    KeyUp,
    /// Opens the modal for the selected image.
    OpenSelected,
    /// Requests the next page of the current query.
    LoadMore,
    /// Closes the modal if it is listening for Escape; otherwise leaves the
    /// search bar.
    Escape,
    /// Closes the modal regardless of focus.
    CloseModal,
    /// Left click at a 1-indexed cell.
    ///
    /// Hit-tested against [`AppState::layout`]. While the modal is open, only
    /// the modal box and its backdrop are considered.
    Click {
        /// Terminal row, 1-indexed.
        row: usize,
        /// Terminal column, 1-indexed.
        col: usize,
    },

    /// A web request issued by [`Action::Fetch`] completed.
    FetchSettled {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
        /// Context echoed back by the host; carries the request ticket.
        context: BTreeMap<String, String>,
    },

    /// An advisory timer fired.
    ///
    /// Timers are scheduled one per raised advisory, so each firing expires
    /// the oldest advisory still queued.
    AdvisoryExpired,

    /// Hides the plugin pane. Ignored while the modal is open.
    CloseFocus,
}

/// Processes an event, mutates state, and returns whether to re-render plus
/// the actions to execute.
///
/// Keyboard and mouse events are swallowed while the modal is open, except
/// the ones that close it. Fetch results are applied through
/// [`Orchestrator::settle`](crate::search::Orchestrator::settle), which drops
/// results from superseded requests.
///
/// # Parameters
///
/// * `state` - Application state to mutate
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. `should_render` is `true` when
/// something on screen changed. The actions are host calls main.rs executes
/// in order: [`Action::Fetch`], [`Action::ScheduleAdvisoryExpiry`] and
/// [`Action::CloseFocus`].
///
/// # Example
///
/// ```
/// use pixzel::{handle_event, initialize, Action, Config, Event};
///
/// let mut state = initialize(&Config::default());
/// for c in "cats".chars() {
///     handle_event(&mut state, &Event::Char(c))?;
/// }
/// let (render, actions) = handle_event(&mut state, &Event::Submit)?;
/// assert!(render);
/// assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
/// # Ok::<(), pixzel::PixzelError>(())
/// ```
///
/// # Errors
///
/// Returns [`PixzelError::Fetch`](crate::domain::PixzelError::Fetch) if a
/// web request result carries a context this plugin did not produce.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.modal.is_visible() || state.focus != Focus::SearchBar {
                return Ok((false, vec![]));
            }
            state.search.push(*c);
            tracing::trace!(buffer = %state.search.buffer(), char = %c, "search buffer updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.modal.is_visible() || state.focus != Focus::SearchBar {
                return Ok((false, vec![]));
            }
            Ok((state.search.pop(), vec![]))
        }
        Event::Submit => {
            if state.modal.is_visible() {
                return Ok((false, vec![]));
            }
            Ok(submit(state))
        }
        Event::FocusSearch => {
            if state.modal.is_visible() || state.focus == Focus::SearchBar {
                return Ok((false, vec![]));
            }
            state.focus = Focus::SearchBar;
            Ok((true, vec![]))
        }
        Event::FocusGallery => {
            if state.modal.is_visible() || state.focus == Focus::Gallery {
                return Ok((false, vec![]));
            }
            state.focus = Focus::Gallery;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if state.modal.is_visible() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.modal.is_visible() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::OpenSelected => Ok((open_selected(state), vec![])),
        Event::LoadMore => {
            if state.modal.is_visible() {
                return Ok((false, vec![]));
            }
            Ok(load_more(state))
        }
        Event::Escape => {
            if state.listeners.is_listening() {
                return Ok((state.modal.close(), vec![]));
            }
            if state.focus == Focus::SearchBar {
                state.focus = Focus::Gallery;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::CloseModal => Ok((state.modal.close(), vec![])),
        Event::Click { row, col } => Ok(click(state, *row, *col)),
        Event::FetchSettled {
            status,
            body,
            context,
        } => {
            let ticket = RequestTicket::from_context(context)?;
            let outcome = parse_response(*status, body);
            tracing::debug!(
                seq = ticket.seq,
                page = ticket.page,
                status = *status,
                ok = outcome.is_ok(),
                "web request settled"
            );
            let settlement = state.orchestrator.settle(&ticket, outcome);
            Ok(apply_settlement(state, settlement))
        }
        Event::AdvisoryExpired => Ok((state.advisories.expire_oldest().is_some(), vec![])),
        Event::CloseFocus => {
            if state.modal.is_visible() {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::CloseFocus]))
        }
    }
}

/// Validates the search buffer and starts a new search. A rejected query
/// raises an advisory instead.
fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    let query = match state.search.submit() {
        Ok(query) => query,
        Err(error) => return raise(state, Advisory::warning(error.to_string())),
    };

    match state.orchestrator.submit(query) {
        Ok(ticket) => {
            state.selected_index = 0;
            state.focus = Focus::Gallery;
            (true, dispatch(state, ticket))
        }
        Err(error @ SearchError::DuplicateQuery { .. }) => {
            raise(state, Advisory::warning(error.to_string()))
        }
        Err(error) => {
            tracing::debug!(error = %error, "search not submitted");
            (false, vec![])
        }
    }
}

fn load_more(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.orchestrator.load_more() {
        Ok(ticket) => (true, dispatch(state, ticket)),
        Err(error) => {
            tracing::debug!(error = %error, "load more ignored");
            (false, vec![])
        }
    }
}

/// Turns a ticket into a fetch action. A request that cannot be built
/// settles immediately as a failure.
fn dispatch(state: &mut AppState, ticket: RequestTicket) -> Vec<Action> {
    match state.client.fetch_request(&ticket) {
        Ok(request) => vec![Action::Fetch(request)],
        Err(error) => {
            let settlement = state.orchestrator.settle(&ticket, Err(error));
            apply_settlement(state, settlement).1
        }
    }
}

/// Adjusts selection and advisories after the orchestrator applied a result.
fn apply_settlement(state: &mut AppState, settlement: Settlement) -> (bool, Vec<Action>) {
    match settlement {
        Settlement::Stale => (false, vec![]),
        Settlement::NoResults => {
            state.clamp_selection();
            raise(state, Advisory::info(NO_RESULTS_MESSAGE))
        }
        Settlement::Replaced { .. } => {
            state.selected_index = 0;
            (true, vec![])
        }
        Settlement::Appended { .. } => (true, vec![]),
        Settlement::Failed { message } => {
            state.clamp_selection();
            raise(
                state,
                Advisory::error(format!("Something went wrong: {message}")),
            )
        }
    }
}

/// Queues an advisory and schedules its expiry.
fn raise(state: &mut AppState, advisory: Advisory) -> (bool, Vec<Action>) {
    state.advisories.raise(advisory);
    (
        true,
        vec![Action::ScheduleAdvisoryExpiry {
            millis: ADVISORY_DURATION_MS,
        }],
    )
}

fn open_selected(state: &mut AppState) -> bool {
    if state.modal.is_visible() {
        return false;
    }
    let Some(item) = state.selected_item() else {
        tracing::debug!("no image selected");
        return false;
    };
    let (full_url, tags) = (item.full_url.clone(), item.tags.clone());
    state.modal.open(full_url, tags, &state.listeners);
    true
}

/// Routes a 1-indexed click to the modal, or to the region under it.
fn click(state: &mut AppState, row: usize, col: usize) -> (bool, Vec<Action>) {
    if state.modal.is_visible() {
        if state.layout.modal_rect().contains(row, col) {
            return (false, vec![]);
        }
        tracing::debug!(row, col, "backdrop clicked");
        return (state.modal.close(), vec![]);
    }

    match state.layout.hit_test(row, col) {
        Region::SearchBar => {
            let changed = state.focus != Focus::SearchBar;
            state.focus = Focus::SearchBar;
            (changed, vec![])
        }
        Region::GalleryRow(offset) => {
            if !state.select_visible_row(offset) {
                return (false, vec![]);
            }
            state.focus = Focus::Gallery;
            open_selected(state);
            (true, vec![])
        }
        Region::StatusLine => load_more(state),
        Region::Elsewhere => (false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PixabayClient;
    use crate::ui::Theme;

    fn fresh_state() -> AppState {
        AppState::new(PixabayClient::default(), Theme::default())
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn fetched_context(actions: &[Action]) -> BTreeMap<String, String> {
        match actions {
            [Action::Fetch(request)] => request.context.clone(),
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    fn body(first_id: u64, count: u64, total: u32) -> Vec<u8> {
        let hits: Vec<String> = (first_id..first_id + count)
            .map(|id| {
                format!(
                    r#"{{"id":{id},"tags":"cat {id}","webformatURL":"https://cdn/{id}_640.jpg","largeImageURL":"https://cdn/{id}_1280.jpg"}}"#
                )
            })
            .collect();
        format!(r#"{{"total":{total},"totalHits":{total},"hits":[{}]}}"#, hits.join(",")).into_bytes()
    }

    #[test]
    fn blank_submit_raises_a_warning_and_fetches_nothing() {
        let mut state = fresh_state();
        type_query(&mut state, "   ");

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleAdvisoryExpiry { millis: 2500 }]);
        assert_eq!(
            state.advisories.current().map(|a| a.message.as_str()),
            Some("Type something in the search field")
        );
        assert_eq!(state.orchestrator.generation(), 0);
    }

    #[test]
    fn duplicate_query_is_rejected_with_an_advisory() {
        let mut state = fresh_state();
        type_query(&mut state, "cats");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let context = fetched_context(&actions);
        handle_event(
            &mut state,
            &Event::FetchSettled { status: 200, body: body(1, 12, 40), context },
        )
        .unwrap();

        handle_event(&mut state, &Event::FocusSearch).unwrap();
        type_query(&mut state, "Cats");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(actions, vec![Action::ScheduleAdvisoryExpiry { millis: 2500 }]);
        assert_eq!(
            state.advisories.current().map(|a| a.message.as_str()),
            Some("Pictures on this query have already been requested!")
        );
        assert_eq!(state.orchestrator.items().len(), 12);
    }

    #[test]
    fn zero_hits_raise_no_results() {
        let mut state = fresh_state();
        type_query(&mut state, "qwzx");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let context = fetched_context(&actions);

        let (_, actions) = handle_event(
            &mut state,
            &Event::FetchSettled { status: 200, body: body(1, 0, 0), context },
        )
        .unwrap();

        assert_eq!(actions.len(), 1);
        assert_eq!(
            state.advisories.current().map(|a| a.message.as_str()),
            Some(NO_RESULTS_MESSAGE)
        );
        assert!(!state.orchestrator.is_loading());
    }

    #[test]
    fn http_failure_raises_an_error_advisory() {
        let mut state = fresh_state();
        type_query(&mut state, "cats");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let context = fetched_context(&actions);

        handle_event(
            &mut state,
            &Event::FetchSettled {
                status: 400,
                body: b"[ERROR 400] \"key\" is invalid".to_vec(),
                context,
            },
        )
        .unwrap();

        let message = state.advisories.current().map(|a| a.message.clone()).unwrap();
        assert!(message.starts_with("Something went wrong: "));
        assert!(!state.orchestrator.is_loading());
    }

    #[test]
    fn foreign_context_is_an_error() {
        let mut state = fresh_state();
        let result = handle_event(
            &mut state,
            &Event::FetchSettled { status: 200, body: vec![], context: BTreeMap::new() },
        );
        assert!(result.is_err());
    }

    #[test]
    fn escape_leaves_the_search_bar_when_nothing_listens() {
        let mut state = fresh_state();
        assert_eq!(state.focus, Focus::SearchBar);

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert_eq!(state.focus, Focus::Gallery);

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
    }

    #[test]
    fn typing_is_ignored_outside_the_search_bar() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::FocusGallery).unwrap();

        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.search.buffer(), "");
    }

    #[test]
    fn advisory_timer_expires_the_oldest() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.advisories.len(), 1);

        let (render, _) = handle_event(&mut state, &Event::AdvisoryExpired).unwrap();
        assert!(render);
        assert!(state.advisories.is_empty());

        let (render, _) = handle_event(&mut state, &Event::AdvisoryExpired).unwrap();
        assert!(!render);
    }

    #[test]
    fn close_focus_is_forwarded() {
        let mut state = fresh_state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn close_focus_is_ignored_while_the_modal_is_open() {
        let mut state = fresh_state();
        type_query(&mut state, "cats");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let context = fetched_context(&actions);
        handle_event(
            &mut state,
            &Event::FetchSettled { status: 200, body: body(1, 12, 40), context },
        )
        .unwrap();
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(state.modal.is_visible());

        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.modal.is_visible());
    }
}
