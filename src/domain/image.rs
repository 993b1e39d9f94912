//! Image search domain model.
//!
//! [`ImageItem`] is one hit returned by the image provider, reduced to the
//! fields the gallery displays. [`SearchPage`] is one page of hits together
//! with the provider's total hit count for the query.

/// Number of hits the provider returns per page.
///
/// Fixed to match the provider's `per_page` parameter; pagination arithmetic
/// (`total - page * PAGE_SIZE`) depends on both agreeing.
pub const PAGE_SIZE: u32 = 12;

/// A single image search hit.
///
/// Immutable once fetched. The gallery lists `tags` and `preview_url`; the
/// modal shows `full_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    /// Provider image id.
    pub id: u64,
    /// Comma-separated tags, as sent by the provider.
    pub tags: String,
    /// Small rendition (`webformatURL`).
    pub preview_url: String,
    /// Large rendition (`largeImageURL`).
    pub full_url: String,
}

impl ImageItem {
    /// Creates an image item from its four displayed fields.
    #[must_use]
    pub fn new(
        id: u64,
        tags: impl Into<String>,
        preview_url: impl Into<String>,
        full_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tags: tags.into(),
            preview_url: preview_url.into(),
            full_url: full_url.into(),
        }
    }
}

/// One page of search results.
///
/// `total_count` is the number of matches across all pages for the query and
/// is stable for a given query regardless of which page was requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Hits on this page, at most [`PAGE_SIZE`].
    pub items: Vec<ImageItem>,
    /// Matches across all pages (`totalHits`).
    pub total_count: u32,
}
