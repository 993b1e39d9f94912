//! Search bar input buffer.
//!
//! Holds the text being typed and turns it into a normalized query on submit.
//! Only emptiness is validated here; duplicate detection belongs to the
//! orchestrator, which knows the current query.

use crate::domain::SearchError;

/// Trims and lower-cases a raw query. Returns `None` when nothing remains.
///
/// # Example
///
/// ```
/// use pixzel::search::normalize_query;
///
/// assert_eq!(normalize_query("  Red Fox "), Some("red fox".to_string()));
/// assert_eq!(normalize_query(" \t "), None);
/// ```
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// The search bar's local state: the current input buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    buffer: String,
}

impl SearchInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a typed character, lower-cased as it is entered.
    pub fn push(&mut self, c: char) {
        self.buffer.extend(c.to_lowercase());
    }

    /// Removes the last character. Returns `false` if the buffer was empty.
    pub fn pop(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Submits the buffer.
    ///
    /// On success the normalized query is returned and the buffer is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] when the buffer is blank; the
    /// buffer is left as it was.
    pub fn submit(&mut self) -> Result<String, SearchError> {
        let Some(query) = normalize_query(&self.buffer) else {
            tracing::debug!("rejecting blank search submission");
            return Err(SearchError::EmptyQuery);
        };

        self.buffer.clear();
        tracing::debug!(query = %query, "search submitted");
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::new();
        text.chars().for_each(|c| input.push(c));
        input
    }

    #[test]
    fn typing_is_lower_cased() {
        assert_eq!(typed("Black CAT").buffer(), "black cat");
    }

    #[test]
    fn submit_normalizes_and_clears_the_buffer() {
        let mut input = typed("  Sea Otter  ");
        assert_eq!(input.submit(), Ok("sea otter".to_string()));
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn blank_submit_is_rejected_without_touching_the_buffer() {
        let mut input = typed("   ");
        assert_eq!(input.submit(), Err(SearchError::EmptyQuery));
        assert_eq!(input.buffer(), "   ");

        let mut empty = SearchInput::new();
        assert_eq!(empty.submit(), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn backspace_reports_whether_anything_was_removed() {
        let mut input = typed("ok");
        assert!(input.pop());
        assert!(input.pop());
        assert!(!input.pop());
    }
}
