//! HTTP client for the content service.
//!
//! # Responsibilities
//! - Build item URLs (`<base>/items/<resource>[/<id>]`) and query strings
//! - Issue GET/POST requests
//! - Unwrap the `data` envelope
//! - Surface transport, status and decode failures as `DirectoryError`
//!
//! # Design Decisions
//! - No retries and no client-side timeout; platform defaults apply
//! - Non-2xx is always an error, including on POST
//! - POST response bodies are discarded

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use url::Url;

use crate::directory::query::Query;
use crate::directory::types::{DirectoryError, DirectoryResult, Envelope};
use crate::observability::metrics;

const JSON_UTF8: &str = "application/json;charset=UTF-8";

/// Client for the item collections of the content service.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str) -> DirectoryResult<Self> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> DirectoryResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| DirectoryError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// GET a collection and return its `data` array.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &Query,
    ) -> DirectoryResult<Vec<T>> {
        let url = self.items_url(resource, None, query)?;
        self.get_data(resource, url).await
    }

    /// GET a single item by id and return its `data` object.
    ///
    /// The id is passed through untouched (only percent-encoded as a path
    /// segment). A 2xx answer with `data: null` yields `None`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> DirectoryResult<Option<T>> {
        let url = self.items_url(resource, Some(id), &Query::new())?;
        self.get_data(resource, url).await
    }

    /// POST a new item as JSON. The response body is ignored.
    pub async fn create<B: Serialize>(&self, resource: &str, body: &B) -> DirectoryResult<()> {
        let url = self.items_url(resource, None, &Query::new())?;
        let payload = serde_json::to_vec(body).map_err(DirectoryError::Encode)?;

        let request = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(payload);

        self.send(resource, Method::POST, &url, request).await?;
        Ok(())
    }

    async fn get_data<T: DeserializeOwned>(&self, resource: &str, url: Url) -> DirectoryResult<T> {
        let request = self.http.get(url.clone());
        let response = self.send(resource, Method::GET, &url, request).await?;

        let body = response.bytes().await.map_err(|source| DirectoryError::Request {
            url: url.to_string(),
            source,
        })?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| DirectoryError::Decode {
                url: url.to_string(),
                source,
            })?;
        Ok(envelope.data)
    }

    async fn send(
        &self,
        resource: &str,
        method: Method,
        url: &Url,
        request: reqwest::RequestBuilder,
    ) -> DirectoryResult<reqwest::Response> {
        let start = Instant::now();
        tracing::debug!(resource, method = %method, url = %url, "Calling content service");

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                metrics::record_upstream(resource, method.as_str(), "error", start);
                tracing::warn!(resource, method = %method, error = %source, "Content service unreachable");
                return Err(DirectoryError::Request {
                    url: url.to_string(),
                    source,
                });
            }
        };

        let status = response.status();
        metrics::record_upstream(resource, method.as_str(), status.as_str(), start);
        tracing::debug!(
            resource,
            method = %method,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Content service responded"
        );

        if !status.is_success() {
            return Err(status_error(url, status));
        }
        Ok(response)
    }

    fn items_url(&self, resource: &str, id: Option<&str>, query: &Query) -> DirectoryResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DirectoryError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("items").push(resource);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }
}

fn status_error(url: &Url, status: StatusCode) -> DirectoryError {
    DirectoryError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    }
}
