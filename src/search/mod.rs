//! Session search service: request, transport and response model.

pub mod client;
pub mod request;
mod types;

pub use client::SearchClient;
pub use request::SearchRequest;
pub use types::*;

use crate::error::Result;

/// Default search endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-myignite.techcommunity.microsoft.com/api/session/search";

/// Decode a raw response body.
pub fn decode(bytes: &[u8]) -> Result<SearchResponse> {
    SearchResponse::from_slice(bytes)
}
