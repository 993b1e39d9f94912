//! Query client for the image search provider.
//!
//! The plugin cannot block on I/O: Zellij performs HTTP on the host and
//! delivers the result later as an event. A page fetch is therefore split in
//! two halves around the host call:
//!
//! ```text
//! fetch_request(query, page) ──► web_request(url, context) ──► parse_response(status, body)
//!        (this module)               (plugin shim)                 (this module)
//! ```
//!
//! Together they form one `fetch_page(query, page) -> Result<SearchPage, FetchError>`:
//! exactly one outbound request per call, no retries, no caching.
//!
//! # Modules
//!
//! - [`request`]: URL building, request tickets and context maps
//! - [`response`]: Payload decoding

pub mod request;
pub mod response;

pub use request::{percent_encode, FetchRequest, RequestTicket};
pub use response::parse_response;

use crate::domain::{FetchError, PAGE_SIZE};

/// Default provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";

/// Client for a Pixabay-compatible image search endpoint.
///
/// Holds the static request parameters. The API key is opaque configuration;
/// a missing key still produces a request, which the provider rejects with an
/// HTTP error that surfaces as a regular fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabayClient {
    endpoint: String,
    api_key: Option<String>,
    image_type: String,
    orientation: String,
}

impl Default for PixabayClient {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
        }
    }
}

impl PixabayClient {
    /// Creates a client for `endpoint` with fixed request parameters.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - Search URL; may already carry a query string
    /// * `api_key` - Provider key, sent as `key` when present
    /// * `image_type` - Provider `image_type` filter, e.g. `photo`
    /// * `orientation` - Provider `orientation` filter, e.g. `horizontal`
    ///
    /// # Example
    ///
    /// ```
    /// use pixzel::client::{PixabayClient, RequestTicket};
    ///
    /// let client = PixabayClient::new(
    ///     "https://pixabay.com/api/",
    ///     Some("abc123".to_string()),
    ///     "photo",
    ///     "horizontal",
    /// );
    /// let ticket = RequestTicket { seq: 1, query: "red fox".to_string(), page: 2 };
    /// let request = client.fetch_request(&ticket)?;
    /// assert!(request.url.starts_with("https://pixabay.com/api/?q=red%20fox&page=2&key=abc123"));
    /// # Ok::<(), pixzel::domain::FetchError>(())
    /// ```
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        image_type: impl Into<String>,
        orientation: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            image_type: image_type.into(),
            orientation: orientation.into(),
        }
    }

    /// Whether a non-empty API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Builds the GET request for one page of results.
    ///
    /// The ticket is embedded in the request context so the result can be
    /// matched to its fetch.
    ///
    /// # Parameters
    ///
    /// * `ticket` - Query, page and generation issued by the orchestrator
    ///
    /// # Returns
    ///
    /// A [`FetchRequest`] with the full URL (`q`, `page`, `key`,
    /// `image_type`, `orientation`, `per_page`) and the context map to hand
    /// to the host.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] if the query is blank or the
    /// page is zero.
    pub fn fetch_request(&self, ticket: &RequestTicket) -> Result<FetchRequest, FetchError> {
        if ticket.query.trim().is_empty() {
            return Err(FetchError::InvalidRequest("query must not be empty".to_string()));
        }
        if ticket.page == 0 {
            return Err(FetchError::InvalidRequest("page must be at least 1".to_string()));
        }

        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{separator}q={}&page={}",
            self.endpoint,
            percent_encode(&ticket.query),
            ticket.page
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&percent_encode(key));
        }
        url.push_str("&image_type=");
        url.push_str(&percent_encode(&self.image_type));
        url.push_str("&orientation=");
        url.push_str(&percent_encode(&self.orientation));
        url.push_str(&format!("&per_page={PAGE_SIZE}"));

        tracing::debug!(
            seq = ticket.seq,
            query = %ticket.query,
            page = ticket.page,
            "built fetch request"
        );

        Ok(FetchRequest {
            url,
            context: ticket.to_context(),
        })
    }
}
