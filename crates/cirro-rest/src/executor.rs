//! The serialized request pipeline.
//!
//! Each client owns one background worker pulling request envelopes off an
//! unbounded intake queue and performing them strictly one at a time, in
//! arrival order across all callers. At most one remote call is in flight
//! per client at any instant; enqueueing never blocks. The worker delivers
//! exactly one outcome per envelope through the envelope's reply slot and
//! exits once every queue sender has been dropped.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use cirro_client::{
    translate_error, Error, ErrorKind, RequestMethod, Result, Transport, TransportRequest,
};

use crate::query::QueryParams;
use crate::{API_KEY_HEADER, APPLICATION_ID_HEADER};

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// One queued operation: where to send it, what to send, and the single-use
/// reply slot its outcome is delivered through.
pub(crate) struct Envelope {
    pub method: RequestMethod,
    pub url: String,
    pub params: QueryParams,
    pub body: Option<Bytes>,
    pub reply: Box<dyn ReplySlot>,
}

/// Type-erased delivery contract.
///
/// Consumes the raw outcome of one remote call exactly once and completes
/// the caller's private channel with a typed result. The worker stays
/// oblivious to what the caller wanted decoded.
pub(crate) trait ReplySlot: Send + Sync {
    fn complete(self: Box<Self>, outcome: Result<Bytes>);
}

/// Decodes the success body into `T` before completing the channel.
///
/// A decode failure on a success status becomes the call's error.
pub(crate) struct DecodeReply<T> {
    pub tx: oneshot::Sender<Result<T>>,
}

impl<T> ReplySlot for DecodeReply<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn complete(self: Box<Self>, outcome: Result<Bytes>) {
        let result =
            outcome.and_then(|body| serde_json::from_slice(&body).map_err(Into::into));
        let _ = self.tx.send(result);
    }
}

/// Discards the success body; only success or failure crosses the channel.
pub(crate) struct DiscardReply {
    pub tx: oneshot::Sender<Result<()>>,
}

impl ReplySlot for DiscardReply {
    fn complete(self: Box<Self>, outcome: Result<Bytes>) {
        let _ = self.tx.send(outcome.map(|_| ()));
    }
}

/// Credentials and transport handle the worker owns for its lifetime.
pub(crate) struct ExecutorContext {
    pub app_id: String,
    pub api_key: String,
    pub transport: Arc<dyn Transport>,
}

/// Spawn the worker onto the current runtime; returns the intake handle.
pub(crate) fn spawn(ctx: ExecutorContext) -> mpsc::UnboundedSender<Envelope> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run(ctx, rx));
    tx
}

/// Worker loop: strict FIFO, one envelope fully processed before the next
/// is pulled.
async fn run(ctx: ExecutorContext, mut intake: mpsc::UnboundedReceiver<Envelope>) {
    while let Some(envelope) = intake.recv().await {
        let outcome = perform(&ctx, &envelope).await;
        envelope.reply.complete(outcome);
    }
    debug!("intake queue closed, request worker exiting");
}

/// One remote call: compose the final URL, set the auth headers, dispatch
/// through the transport, and split the outcome on status.
async fn perform(ctx: &ExecutorContext, envelope: &Envelope) -> Result<Bytes> {
    let url = if envelope.params.is_empty() {
        envelope.url.clone()
    } else {
        format!("{}?{}", envelope.url, envelope.params.encode()?)
    };

    let mut request = TransportRequest::new(envelope.method, url.clone())
        .header(APPLICATION_ID_HEADER, &ctx.app_id)
        .header(API_KEY_HEADER, &ctx.api_key);
    if let Some(body) = &envelope.body {
        request = request
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON)
            .body(body.clone());
    }

    let response = ctx.transport.perform(request).await?;

    if response.is_success() {
        Ok(response.body)
    } else {
        Err(Error::new(ErrorKind::Api(translate_error(&response, &url))))
    }
}
