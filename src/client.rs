//! HTTP client for driving the stubbed location API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::HarnessError;
use crate::model::paths;

/// Client bound to one base URL, with the library default timeout.
pub struct LocationClient {
    client: Client,
    base_url: Url,
}

impl LocationClient {
    /// Create a client with a 30 second timeout.
    pub fn new(base_url: Url) -> Self {
        Self::with_timeout(base_url, 30)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: Url, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Join a path onto the base URL.
    fn url_for(&self, path: &str) -> Result<Url, HarnessError> {
        self.base_url
            .join(path)
            .map_err(|e| HarnessError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Issue a GET against the given path.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, HarnessError> {
        let url = self.url_for(path)?;
        let response = self.client.get(url).send().await?;
        HttpResponse::from_reqwest(response).await
    }

    /// Issue a POST with a JSON body against the given path.
    pub async fn post_json(
        &self,
        path: &str,
        body: impl Into<Vec<u8>>,
    ) -> Result<HttpResponse, HarnessError> {
        let url = self.url_for(path)?;
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body.into())
            .send()
            .await?;
        HttpResponse::from_reqwest(response).await
    }

    /// `GET /location/get/all`.
    pub async fn list_all(&self) -> Result<HttpResponse, HarnessError> {
        self.get(paths::LIST_ALL).await
    }

    /// `GET /location/get/{code}`.
    pub async fn location(&self, code: &str) -> Result<HttpResponse, HarnessError> {
        self.get(&paths::location(code)).await
    }

    /// `POST /location/get/all` with a JSON body.
    pub async fn post_list_all(
        &self,
        body: impl Into<Vec<u8>>,
    ) -> Result<HttpResponse, HarnessError> {
        self.post_json(paths::LIST_ALL, body).await
    }
}

/// An HTTP response with its body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_success: bool,
}

impl HttpResponse {
    async fn from_reqwest(response: reqwest::Response) -> Result<Self, HarnessError> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<invalid>").to_string(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(Self {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            headers,
            body,
            is_success: status.is_success(),
        })
    }

    /// Parse the response body as untyped JSON.
    pub fn json(&self) -> Result<Value, HarnessError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the response body into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The `content-type` header, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}
