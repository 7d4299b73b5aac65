//! # cirro-client
//!
//! Core HTTP infrastructure for the Cirro object-storage API.
//!
//! This crate provides the foundation the REST surface is built on:
//! - The [`Transport`] capability: one HTTP round trip in, status/headers/body out
//! - [`HttpTransport`], the default transport backed by `reqwest`
//! - Client configuration ([`ClientConfig`])
//! - Error types and HTTP-to-domain error translation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     cirro-rest                              │
//! │  - Client facade (typed CRUD operations)                    │
//! │  - Serialized executor (one in-flight call per client)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     cirro-client                            │
//! │  - Transport capability + default reqwest transport         │
//! │  - Configuration, error taxonomy, error translation         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transport is a capability seam: anything implementing [`Transport`]
//! can stand in for the default HTTP client, which is how the
//! ordering/single-flight properties of the pipeline are tested without a
//! network.

mod config;
mod error;
mod response;
pub mod security;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, Error, ErrorKind, ErrorPayload, Result};
pub use response::translate_error;
pub use transport::{HttpTransport, RequestMethod, Transport, TransportRequest, TransportResponse};

/// Default API root that collection URLs are joined against.
pub const DEFAULT_BASE_URL: &str = "https://api.cirro.dev/1/classes";

/// User-Agent string for the default transport.
pub const USER_AGENT: &str = concat!("cirro-api/", env!("CARGO_PKG_VERSION"));
