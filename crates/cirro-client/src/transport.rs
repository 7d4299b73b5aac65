//! The transport capability and its default `reqwest` implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// The wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One HTTP request, fully described: method, absolute URL, headers, body.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: RequestMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// One HTTP response: status, headers, body bytes.
///
/// Header names are normalized to lowercase for case-insensitive lookups.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a response, normalizing header names to lowercase.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns true if the status signals success (200 or 201).
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }
}

/// Capability for performing a single HTTP round trip.
///
/// Implementations return the raw status, headers, and body for any response
/// the server produced, reserving `Err` for transport-level failures
/// (connection errors, timeouts). Status interpretation is the caller's job.
///
/// A client's executor invokes its transport from exactly one worker, so an
/// implementation never sees two calls in flight for the same client.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Perform one HTTP request.
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    enable_tracing: bool,
}

impl HttpTransport {
    /// Create a transport from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            enable_tracing: config.enable_tracing,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        if self.enable_tracing {
            debug!(
                method = request.method.as_str(),
                url = %request.url,
                "sending request"
            );
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        if self.enable_tracing {
            debug!(status, len = body.len(), "response received");
        }

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
