//! Gallery interaction state: the enlarged-image modal and the Escape
//! listener registry it acquires from.
//!
//! # Modules
//!
//! - [`listeners`]: Scoped Escape key listener registrations
//! - [`modal`]: Modal visibility and content

pub mod listeners;
pub mod modal;

pub use listeners::{EscapeGuard, EscapeListeners};
pub use modal::{ModalSession, ModalState};
