//! Outbound request construction.
//!
//! A [`FetchRequest`] is everything the host needs to issue one GET: the fully
//! encoded URL and a context map. The context carries the [`RequestTicket`] so
//! that the asynchronous result can be matched back to the fetch that caused
//! it, and discarded if a newer fetch has been issued since.

use crate::domain::FetchError;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const CONTEXT_SEQ: &str = "request_seq";
const CONTEXT_QUERY: &str = "query";
const CONTEXT_PAGE: &str = "page";

/// Identity of one scheduled fetch.
///
/// `seq` is the orchestrator's generation counter at issue time and is the
/// only field used to detect stale results; `query` and `page` are carried
/// for logging and sanity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Orchestrator generation at the time the fetch was scheduled.
    pub seq: u64,
    /// Normalized query.
    pub query: String,
    /// Page to fetch, starting at 1.
    pub page: u32,
}

impl RequestTicket {
    /// Serializes the ticket into a Zellij web request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_SEQ.to_string(), self.seq.to_string());
        context.insert(CONTEXT_QUERY.to_string(), self.query.clone());
        context.insert(CONTEXT_PAGE.to_string(), self.page.to_string());
        context
    }

    /// Reconstructs a ticket from the context map returned with a web request result.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Context`] if a key is missing or a number does not parse.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self, FetchError> {
        let field = |key: &str| {
            context
                .get(key)
                .ok_or_else(|| FetchError::Context(format!("missing `{key}`")))
        };

        let seq = field(CONTEXT_SEQ)?
            .parse::<u64>()
            .map_err(|e| FetchError::Context(format!("bad `{CONTEXT_SEQ}`: {e}")))?;
        let page = field(CONTEXT_PAGE)?
            .parse::<u32>()
            .map_err(|e| FetchError::Context(format!("bad `{CONTEXT_PAGE}`: {e}")))?;
        let query = field(CONTEXT_QUERY)?.clone();

        Ok(Self { seq, query, page })
    }
}

/// A fully built GET request ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL including the encoded query string.
    pub url: String,
    /// Opaque context echoed back by the host with the result.
    pub context: BTreeMap<String, String>,
}

/// Percent-encodes a query parameter value.
///
/// Everything outside the RFC 3986 unreserved set is encoded byte-wise, so
/// multi-byte UTF-8 input produces one `%XX` triplet per byte.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
