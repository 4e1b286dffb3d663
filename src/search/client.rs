//! Blocking HTTP client for the session search endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::request::{self, SearchRequest};
use super::types::SearchResponse;
use crate::error::{Error, Result};

/// Sends the search request and hands back the raw response body.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Create a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the search request and read the full body.
    ///
    /// Only `200 OK` is accepted. Nothing is retried.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(request::headers(&self.endpoint))
            .json(&SearchRequest::default())
            .send()
            .map_err(Error::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status { status });
        }

        let body = response.bytes().map_err(Error::Body)?;
        debug!("received {} bytes", body.len());
        Ok(body.to_vec())
    }

    /// Fetch and decode in one step.
    pub fn search(&self) -> Result<SearchResponse> {
        let body = self.fetch()?;
        SearchResponse::from_slice(&body)
    }
}
