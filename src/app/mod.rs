//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Host events → Events → handle_event → State mutations → Actions → Host calls
//!                            ↑                                         ↓
//!                            └──────── web request results, timers ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input focus
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```
//! use pixzel::app::{handle_event, Action, AppState, Event};
//! use pixzel::client::PixabayClient;
//! use pixzel::ui::Theme;
//!
//! let mut state = AppState::new(PixabayClient::default(), Theme::default());
//! for c in "cats".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), pixzel::domain::PixzelError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use state::AppState;
