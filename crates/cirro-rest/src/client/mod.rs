//! Cirro REST API client.
//!
//! The facade over the serialized request pipeline: public CRUD operations
//! that build request envelopes, submit them to the client's worker, and
//! await the typed outcome.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, oneshot};
use url::Url;

use cirro_client::{
    security, ClientConfig, Error, ErrorKind, HttpTransport, RequestMethod, Result, Transport,
};

use crate::executor::{self, DecodeReply, DiscardReply, Envelope, ExecutorContext};
use crate::query::QueryParams;

mod crud;

/// Cirro object-storage API client.
///
/// One client owns one background worker; every operation on the client and
/// on its clones goes through that worker's queue, so at most one remote
/// call is in flight per client at any instant and calls are serviced in
/// submission order. Independent clients (for example with different
/// credentials) get independent workers and never interfere.
///
/// Construction spawns the worker onto the current tokio runtime, so a
/// client must be created from within one. Dropping the last handle closes
/// the intake queue; the worker finishes what is queued and exits.
///
/// # Example
///
/// ```rust,ignore
/// use cirro_rest::{Cirro, QueryParams};
///
/// let client = Cirro::new("app-id", "rest-api-key")?;
/// let score: serde_json::Value = client
///     .retrieve("GameScore", "Ed1nuqPvcm", QueryParams::new())
///     .await?;
/// ```
#[derive(Clone)]
pub struct Cirro {
    base_url: String,
    intake: mpsc::UnboundedSender<Envelope>,
}

impl std::fmt::Debug for Cirro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cirro")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Cirro {
    /// Create a client against the hosted service with the default
    /// transport and configuration.
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(app_id, api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration and the default transport.
    pub fn with_config(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Self::with_transport(app_id, api_key, config, transport)
    }

    /// Create a client with a caller-supplied transport.
    ///
    /// The transport is invoked exclusively by the client's single worker,
    /// never concurrently.
    pub fn with_transport(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let intake = executor::spawn(ExecutorContext {
            app_id: app_id.into(),
            api_key: api_key.into(),
            transport,
        });

        Ok(Self { base_url, intake })
    }

    /// The configured API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a collection.
    fn collection_url(&self, class_name: &str) -> Result<String> {
        if !security::is_safe_class_name(class_name) {
            return Err(Error::new(ErrorKind::Config(format!(
                "invalid class name: {class_name:?}"
            ))));
        }
        Ok(format!("{}/{}", self.base_url, class_name))
    }

    /// URL of a single object within a collection.
    fn object_url(&self, class_name: &str, object_id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            self.collection_url(class_name)?,
            urlencoding::encode(object_id)
        ))
    }

    /// Submit an envelope and await its decoded outcome.
    async fn submit<T>(
        &self,
        method: RequestMethod,
        url: String,
        params: QueryParams,
        body: Option<Bytes>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.enqueue(Envelope {
            method,
            url,
            params,
            body,
            reply: Box::new(DecodeReply { tx }),
        })?;
        rx.await.map_err(|_| pipeline_terminated())?
    }

    /// Submit an envelope whose success body is discarded.
    async fn submit_discard(
        &self,
        method: RequestMethod,
        url: String,
        params: QueryParams,
        body: Option<Bytes>,
    ) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.enqueue(Envelope {
            method,
            url,
            params,
            body,
            reply: Box::new(DiscardReply { tx }),
        })?;
        rx.await.map_err(|_| pipeline_terminated())?
    }

    fn enqueue(&self, envelope: Envelope) -> Result<()> {
        self.intake
            .send(envelope)
            .map_err(|_| pipeline_terminated())
    }
}

fn pipeline_terminated() -> Error {
    Error::new(ErrorKind::Other("request pipeline terminated".to_string()))
}
