//! Search layer: the search bar buffer and the result orchestrator.
//!
//! ```text
//! SearchInput::submit ──► Orchestrator::submit ──► RequestTicket ──► client
//!                           Orchestrator::settle ◄── SearchPage / FetchError
//! ```
//!
//! # Modules
//!
//! - [`input`]: Query buffer, normalization and blank-query validation
//! - [`orchestrator`]: Pagination state machine with stale-result guarding

pub mod input;
pub mod orchestrator;

pub use input::{normalize_query, SearchInput};
pub use orchestrator::{Orchestrator, SearchStatus, Settlement};
