//! Domain layer for the pixzel plugin.
//!
//! Core types independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image hits and result pages
//! - [`advisory`]: Transient user-facing notifications
//!
//! # Examples
//!
//! ```
//! use pixzel::domain::{ImageItem, SearchPage};
//!
//! let page = SearchPage {
//!     items: vec![ImageItem::new(1, "cat, pet", "https://p/1.jpg", "https://f/1.jpg")],
//!     total_count: 40,
//! };
//! assert_eq!(page.items.len(), 1);
//! ```

pub mod advisory;
pub mod error;
pub mod image;

pub use advisory::{Advisories, Advisory, AdvisoryKind, ADVISORY_DURATION_MS};
pub use error::{FetchError, PixzelError, Result, SearchError};
pub use image::{ImageItem, SearchPage, PAGE_SIZE};
