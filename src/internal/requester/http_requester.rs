// src/internal/requester/http_requester.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};

use crate::internal::config::EndpointConfig;
use crate::internal::requester::types::{ApiRequest, ApiResponse, Executor, Method, RequestError};

/// Sends [`ApiRequest`]s to the configured endpoint with a shared reqwest client
#[derive(Clone)]
pub struct HttpRequester {
    client: Client,
    base_url: String,
    default_headers: BTreeMap<String, String>,
}

impl HttpRequester {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            default_headers: endpoint
                .headers
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                .collect(),
        })
    }

    /// Join a request path onto the base URL and check the result is well formed
    pub fn resolve_url(&self, path: &str) -> Result<Url, RequestError> {
        let raw = if path.is_empty() {
            self.base_url.clone()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        Url::parse(&raw).map_err(|source| RequestError::InvalidUrl { url: raw, source })
    }

    /// Config-level headers first, then the request's own, which win on conflict
    fn build_headers(&self, request: &ApiRequest) -> Result<HeaderMap, RequestError> {
        let mut merged = self.default_headers.clone();
        for (key, value) in &request.headers {
            merged.insert(key.to_ascii_lowercase(), value.clone());
        }

        let mut headers = HeaderMap::with_capacity(merged.len());
        for (key, value) in merged {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|e| RequestError::InvalidHeader {
                    name: key.clone(),
                    message: e.to_string(),
                })?;
            let value = HeaderValue::from_str(&value).map_err(|e| RequestError::InvalidHeader {
                name: key.clone(),
                message: e.to_string(),
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// The phrase from the status line. hyper only records it when it differs
    /// from the canonical one, so fall back to that.
    fn reason_phrase(response: &reqwest::Response) -> String {
        match response.extensions().get::<hyper::ext::ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }

    async fn process_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let reason = Self::reason_phrase(&response);

        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (key.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let text = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(ApiResponse {
            status: status.as_u16(),
            reason,
            headers,
            text,
        })
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Executor for HttpRequester {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.resolve_url(&request.path)?;
        let headers = self.build_headers(request)?;

        let mut builder = self
            .client
            .request(to_reqwest(request.method), url.clone())
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        info!("Executing request: {} {}", request.method, url);

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to execute {} {}", request.method, url))?;

        let response = Self::process_response(response).await?;
        debug!(
            status = response.status,
            bytes = response.text.len(),
            "Received response for {} {}",
            request.method,
            request.path
        );
        Ok(response)
    }
}
