//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`layout`]: Screen geometry, shared with mouse hit-testing
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Layout, Rect, Region};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    AdvisoryLine, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ModalInfo, SearchBarInfo,
    StatusLine, UIViewModel,
};
