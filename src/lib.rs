//! # cirro-api
//!
//! Client library for the Cirro object-storage REST API.
//!
//! All remote calls made through one client are funneled into a single
//! serialized request pipeline: one background worker performs at most one
//! HTTP call at a time, in submission order, and hands each caller back a
//! typed result or a structured error. See the `cirro-rest` crate for the
//! full contract.
//!
//! ## Crates
//!
//! - **cirro-client** - Core HTTP infrastructure: transport capability,
//!   configuration, error translation
//! - **cirro-rest** - REST surface: typed CRUD operations over the
//!   serialized pipeline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cirro_api::{Cirro, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Cirro::new("app-id", "rest-api-key")?;
//!
//!     let ack = client
//!         .create("GameScore", &serde_json::json!({"score": 1337}), QueryParams::new())
//!         .await?;
//!     println!("created {}", ack.object_id);
//!
//!     Ok(())
//! }
//! ```

// Re-export crates for convenient access
#[cfg(feature = "client")]
pub use cirro_client as client;
#[cfg(feature = "rest")]
pub use cirro_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use cirro_client::{ClientConfig, ClientConfigBuilder, Error, ErrorKind, Result, Transport};
#[cfg(feature = "rest")]
pub use cirro_rest::{Cirro, CreateAck, ListResults, QueryParams, UpdateAck};
