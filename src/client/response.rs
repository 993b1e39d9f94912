//! Response decoding.
//!
//! Only the fields the gallery consumes are read from the provider's payload:
//!
//! ```json
//! { "totalHits": 40,
//!   "hits": [{ "id": 1, "tags": "cat, pet",
//!              "webformatURL": "https://...", "largeImageURL": "https://..." }] }
//! ```
//!
//! Every other field is ignored.

use crate::domain::{FetchError, ImageItem, SearchPage};
use serde::Deserialize;

/// Longest response body excerpt kept in an HTTP error, in characters.
const ERROR_BODY_LIMIT: usize = 160;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    hits: Vec<WireHit>,
    total_hits: u32,
}

#[derive(Debug, Deserialize)]
struct WireHit {
    id: u64,
    #[serde(default)]
    tags: String,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
}

impl From<WireHit> for ImageItem {
    fn from(hit: WireHit) -> Self {
        Self {
            id: hit.id,
            tags: hit.tags,
            preview_url: hit.webformat_url,
            full_url: hit.large_image_url,
        }
    }
}

/// Decodes a host web request result into a results page.
///
/// # Errors
///
/// - [`FetchError::Http`] for any status outside `200..300`
/// - [`FetchError::Decode`] if the body is not the expected JSON shape
pub fn parse_response(status: u16, body: &[u8]) -> Result<SearchPage, FetchError> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        let excerpt: String = text.trim().chars().take(ERROR_BODY_LIMIT).collect();
        return Err(FetchError::Http {
            status,
            body: excerpt,
        });
    }

    let wire: WireResponse = serde_json::from_slice(body)?;

    Ok(SearchPage {
        items: wire.hits.into_iter().map(ImageItem::from).collect(),
        total_count: wire.total_hits,
    })
}
