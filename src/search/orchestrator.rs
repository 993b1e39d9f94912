//! Search orchestrator: the paginated result store and its fetch state machine.
//!
//! # State Machine
//!
//! ```text
//!            submit(q) / load_more()
//!   Idle ────────────────────────────► Loading ──settle(Ok)──► Resolved
//!    ▲                                    │                       (Idle if 0 hits)
//!    │                                    └──settle(Err)─► Failed
//!    └──────────── next submit / load_more schedules again ◄──────┘
//! ```
//!
//! Every change to `(query, page)` schedules exactly one fetch and bumps the
//! generation counter. The returned [`RequestTicket`] carries that counter;
//! a settlement whose ticket is not the latest generation is discarded, so a
//! late response for an abandoned query can never overwrite fresher results.
//!
//! # Invariants
//!
//! - `items` is cleared and `page` reset to 1 whenever the query changes.
//! - While the query is unchanged, `items` only grows, in arrival order.
//! - At most one ticket is in flight; settling it clears the in-flight flag
//!   whatever the outcome.

use crate::client::RequestTicket;
use crate::domain::{FetchError, ImageItem, SearchError, SearchPage, PAGE_SIZE};

/// Fetch status of the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing fetched yet, or the last fetch found no images.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded with at least one hit.
    Resolved,
    /// The last fetch failed.
    Failed,
}

/// What a settled fetch did to the result store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The ticket belongs to a superseded generation; nothing changed.
    Stale,
    /// The query has no matches at all.
    NoResults,
    /// First page arrived and replaced the result list.
    Replaced { count: usize, total: u32 },
    /// A further page arrived and was appended.
    Appended { count: usize, total: u32 },
    /// The fetch failed; the message is suitable for an advisory.
    Failed { message: String },
}

/// Owns the current query, page, accumulated results and fetch status.
///
/// Constructed explicitly and passed by reference; independent instances
/// share nothing.
#[derive(Debug)]
pub struct Orchestrator {
    query: String,
    page: u32,
    items: Vec<ImageItem>,
    status: SearchStatus,
    total_count: Option<u32>,
    last_error: Option<FetchError>,
    generation: u64,
    in_flight: Option<RequestTicket>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Creates an idle store: no query, page 1, no results.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            items: Vec::new(),
            status: SearchStatus::Idle,
            total_count: None,
            last_error: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// The current normalized query; empty before the first search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The last page requested for the current query, starting at 1.
    ///
    /// A failed next page rolls this back, so it always names the last page
    /// whose items are in [`items`](Self::items).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Accumulated results of the current query, in arrival order.
    #[must_use]
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Status of the latest fetch of the current generation.
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Provider-reported hit count; `None` until the first page settles.
    #[must_use]
    pub const fn total_count(&self) -> Option<u32> {
        self.total_count
    }

    /// The error of the last fetch, cleared by the next success or search.
    #[must_use]
    pub const fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Monotonic request counter; bumped by every scheduled fetch.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a fetch is in flight (drives the loading indicator).
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the load-more control should be offered.
    ///
    /// True iff more hits exist beyond the pages already requested and no
    /// fetch is in flight.
    #[must_use]
    pub fn is_load_more_visible(&self) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.total_count.is_some_and(|total| {
            i64::from(total) - i64::from(self.page) * i64::from(PAGE_SIZE) > 0
        })
    }

    /// Starts a new generation for `query` and schedules its first page.
    ///
    /// `query` is expected to be normalized already (see
    /// [`normalize_query`](super::normalize_query)).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DuplicateQuery`] if `query` is the current query,
    /// unless its first page failed and nothing is shown. No state changes in
    /// that case; a failed later page is retried through
    /// [`load_more`](Self::load_more) instead.
    pub fn submit(&mut self, query: String) -> Result<RequestTicket, SearchError> {
        let first_page_failed = self.status == SearchStatus::Failed && self.items.is_empty();
        if query == self.query && !first_page_failed {
            tracing::debug!(query = %query, "duplicate query rejected");
            return Err(SearchError::DuplicateQuery { query });
        }

        tracing::debug!(
            previous_query = %self.query,
            query = %query,
            discarded_items = self.items.len(),
            "starting new search generation"
        );

        self.query = query;
        self.page = 1;
        self.items.clear();
        self.total_count = None;
        self.last_error = None;
        self.status = SearchStatus::Idle;

        Ok(self.schedule())
    }

    /// Requests the next page of the current query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::LoadMoreUnavailable`] unless
    /// [`is_load_more_visible`](Self::is_load_more_visible) holds.
    pub fn load_more(&mut self) -> Result<RequestTicket, SearchError> {
        if !self.is_load_more_visible() {
            tracing::debug!(
                page = self.page,
                total_count = ?self.total_count,
                loading = self.is_loading(),
                "load more not available"
            );
            return Err(SearchError::LoadMoreUnavailable);
        }

        self.page += 1;
        Ok(self.schedule())
    }

    fn schedule(&mut self) -> RequestTicket {
        self.generation += 1;
        self.status = SearchStatus::Loading;

        let ticket = RequestTicket {
            seq: self.generation,
            query: self.query.clone(),
            page: self.page,
        };
        tracing::debug!(seq = ticket.seq, query = %ticket.query, page = ticket.page, "fetch scheduled");

        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// A failed next-page fetch rolls `page` back so that load-more requests
    /// the same page again; a failed first page allows the same query to be
    /// resubmitted.
    pub fn settle(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<SearchPage, FetchError>,
    ) -> Settlement {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.seq == ticket.seq);
        if !is_current {
            tracing::debug!(
                seq = ticket.seq,
                generation = self.generation,
                query = %ticket.query,
                page = ticket.page,
                "discarding stale fetch result"
            );
            return Settlement::Stale;
        }

        self.in_flight = None;

        match outcome {
            Err(error) => {
                tracing::warn!(query = %self.query, page = self.page, error = %error, "fetch failed");
                let message = error.to_string();
                self.status = SearchStatus::Failed;
                self.last_error = Some(error);
                if self.page > 1 {
                    self.page -= 1;
                }
                Settlement::Failed { message }
            }
            Ok(page) if page.total_count == 0 => {
                tracing::debug!(query = %self.query, "query has no matches");
                self.status = SearchStatus::Idle;
                self.total_count = Some(0);
                self.last_error = None;
                Settlement::NoResults
            }
            Ok(page) => {
                let count = page.items.len();
                let total = page.total_count;
                self.total_count = Some(total);
                self.last_error = None;
                self.status = SearchStatus::Resolved;

                if self.page == 1 {
                    self.items = page.items;
                    tracing::debug!(count, total, "first page replaced results");
                    Settlement::Replaced { count, total }
                } else {
                    self.items.extend(page.items);
                    tracing::debug!(count, total, accumulated = self.items.len(), "page appended");
                    Settlement::Appended { count, total }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(first_id: u64, count: u64) -> Vec<ImageItem> {
        (first_id..first_id + count)
            .map(|id| {
                ImageItem::new(
                    id,
                    format!("tag{id}"),
                    format!("https://cdn/{id}_640.jpg"),
                    format!("https://cdn/{id}_1280.jpg"),
                )
            })
            .collect()
    }

    fn page(first_id: u64, count: u64, total: u32) -> Result<SearchPage, FetchError> {
        Ok(SearchPage {
            items: hits(first_id, count),
            total_count: total,
        })
    }

    fn http_error() -> Result<SearchPage, FetchError> {
        Err(FetchError::Http {
            status: 500,
            body: "boom".to_string(),
        })
    }

    fn resolved_with(query: &str, total: u32) -> Orchestrator {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.submit(query.to_string()).unwrap();
        orchestrator.settle(&ticket, page(1, 12, total));
        orchestrator
    }

    #[test]
    fn starts_idle_on_page_one() {
        let orchestrator = Orchestrator::new();
        assert_eq!(orchestrator.status(), SearchStatus::Idle);
        assert_eq!(orchestrator.page(), 1);
        assert!(orchestrator.items().is_empty());
        assert!(!orchestrator.is_load_more_visible());
    }

    #[test]
    fn duplicate_query_changes_nothing() {
        let mut orchestrator = resolved_with("cats", 40);
        let generation = orchestrator.generation();

        let result = orchestrator.submit("cats".to_string());

        assert_eq!(
            result,
            Err(SearchError::DuplicateQuery {
                query: "cats".to_string()
            })
        );
        assert_eq!(orchestrator.generation(), generation);
        assert_eq!(orchestrator.items().len(), 12);
        assert_eq!(orchestrator.status(), SearchStatus::Resolved);
    }

    #[test]
    fn new_query_resets_page_and_items_before_fetching() {
        let mut orchestrator = resolved_with("cats", 40);
        let more = orchestrator.load_more().unwrap();
        orchestrator.settle(&more, page(13, 12, 40));
        assert_eq!(orchestrator.page(), 2);

        let ticket = orchestrator.submit("dogs".to_string()).unwrap();

        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.query, "dogs");
        assert_eq!(orchestrator.page(), 1);
        assert!(orchestrator.items().is_empty());
        assert_eq!(orchestrator.total_count(), None);
        assert_eq!(orchestrator.status(), SearchStatus::Loading);
        assert!(orchestrator.is_loading());
    }

    #[test]
    fn zero_hits_leaves_items_empty_and_returns_to_idle() {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.submit("qwxzv".to_string()).unwrap();

        let settlement = orchestrator.settle(
            &ticket,
            Ok(SearchPage {
                items: vec![],
                total_count: 0,
            }),
        );

        assert_eq!(settlement, Settlement::NoResults);
        assert!(orchestrator.items().is_empty());
        assert_eq!(orchestrator.status(), SearchStatus::Idle);
        assert!(!orchestrator.is_loading());
        assert!(!orchestrator.is_load_more_visible());
    }

    #[test]
    fn first_page_replaces_and_later_pages_append_in_order() {
        let mut orchestrator = Orchestrator::new();
        let first = orchestrator.submit("cats".to_string()).unwrap();
        assert_eq!(
            orchestrator.settle(&first, page(1, 12, 40)),
            Settlement::Replaced { count: 12, total: 40 }
        );
        assert_eq!(orchestrator.items(), hits(1, 12).as_slice());

        let second = orchestrator.load_more().unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(
            orchestrator.settle(&second, page(13, 12, 40)),
            Settlement::Appended { count: 12, total: 40 }
        );

        assert_eq!(orchestrator.items(), hits(1, 24).as_slice());
        assert_eq!(orchestrator.status(), SearchStatus::Resolved);
    }

    #[test]
    fn load_more_visibility_follows_remaining_hits() {
        let mut orchestrator = resolved_with("cats", 40);
        assert!(orchestrator.is_load_more_visible());

        for (page_number, first_id) in [(2, 13), (3, 25)] {
            let ticket = orchestrator.load_more().unwrap();
            assert_eq!(ticket.page, page_number);
            assert!(!orchestrator.is_load_more_visible(), "hidden while loading");
            orchestrator.settle(&ticket, page(first_id, 12, 40));
        }
        assert!(orchestrator.is_load_more_visible(), "40 - 36 > 0");

        let last = orchestrator.load_more().unwrap();
        orchestrator.settle(&last, page(37, 4, 40));

        assert_eq!(orchestrator.page(), 4);
        assert_eq!(orchestrator.items().len(), 40);
        assert!(!orchestrator.is_load_more_visible(), "40 - 48 <= 0");
        assert_eq!(orchestrator.load_more(), Err(SearchError::LoadMoreUnavailable));
    }

    #[test]
    fn exact_multiple_of_page_size_hides_load_more() {
        let orchestrator = resolved_with("cats", 12);
        assert!(!orchestrator.is_load_more_visible());
    }

    #[test]
    fn superseded_result_is_discarded() {
        let mut orchestrator = Orchestrator::new();
        let cats = orchestrator.submit("cats".to_string()).unwrap();
        let dogs = orchestrator.submit("dogs".to_string()).unwrap();

        assert_eq!(orchestrator.settle(&cats, page(1, 12, 40)), Settlement::Stale);
        assert!(orchestrator.items().is_empty());
        assert!(orchestrator.is_loading());

        assert_eq!(
            orchestrator.settle(&dogs, page(100, 5, 5)),
            Settlement::Replaced { count: 5, total: 5 }
        );
        assert_eq!(orchestrator.items()[0].id, 100);
    }

    #[test]
    fn settling_twice_is_stale_the_second_time() {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.submit("cats".to_string()).unwrap();
        orchestrator.settle(&ticket, page(1, 12, 40));
        assert_eq!(orchestrator.settle(&ticket, page(1, 12, 40)), Settlement::Stale);
        assert_eq!(orchestrator.items().len(), 12);
    }

    #[test]
    fn failed_first_page_allows_resubmitting_the_same_query() {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.submit("cats".to_string()).unwrap();

        let settlement = orchestrator.settle(&ticket, http_error());

        assert_eq!(
            settlement,
            Settlement::Failed {
                message: "HTTP 500: boom".to_string()
            }
        );
        assert_eq!(orchestrator.status(), SearchStatus::Failed);
        assert!(orchestrator.last_error().is_some());
        assert!(!orchestrator.is_loading());

        let retry = orchestrator.submit("cats".to_string()).unwrap();
        assert_eq!(retry.page, 1);
        assert!(orchestrator.last_error().is_none());
    }

    #[test]
    fn failed_next_page_keeps_items_and_retries_the_same_page() {
        let mut orchestrator = resolved_with("cats", 40);
        let second = orchestrator.load_more().unwrap();
        orchestrator.settle(&second, http_error());

        assert_eq!(orchestrator.items().len(), 12);
        assert_eq!(orchestrator.page(), 1);
        assert!(orchestrator.is_load_more_visible());

        let retry = orchestrator.load_more().unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn resubmitting_after_a_failed_next_page_keeps_loaded_results() {
        let mut orchestrator = resolved_with("cats", 40);
        let second = orchestrator.load_more().unwrap();
        orchestrator.settle(&second, Err(FetchError::Context("request_seq".to_string())));
        let generation = orchestrator.generation();

        let result = orchestrator.submit("cats".to_string());

        assert_eq!(
            result,
            Err(SearchError::DuplicateQuery {
                query: "cats".to_string()
            })
        );
        assert_eq!(orchestrator.items(), hits(1, 12).as_slice());
        assert_eq!(orchestrator.page(), 1);
        assert_eq!(orchestrator.generation(), generation);
        assert_eq!(orchestrator.status(), SearchStatus::Failed);
    }
}
