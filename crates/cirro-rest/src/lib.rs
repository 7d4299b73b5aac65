//! # cirro-rest
//!
//! Cirro object-storage REST API client: typed CRUD operations over a
//! serialized request pipeline.
//!
//! Every operation on a [`Cirro`] client is funneled through one background
//! worker that performs remote calls strictly one at a time, in arrival
//! order. Callers submit concurrently without blocking each other; each
//! caller suspends only on its own private reply channel. This bounds the
//! load one client can put on the service and gives uniform error decoding
//! on the way back.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cirro_rest::{Cirro, QueryParams};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct GameScore {
//!     score: i64,
//!     player_name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cirro_rest::Error> {
//!     let client = Cirro::new("app-id", "rest-api-key")?;
//!
//!     // Create
//!     let ack = client
//!         .create("GameScore", &GameScore { score: 1337, player_name: "Sean".into() }, QueryParams::new())
//!         .await?;
//!
//!     // Retrieve
//!     let score: GameScore = client
//!         .retrieve("GameScore", &ack.object_id, QueryParams::new())
//!         .await?;
//!
//!     // Retrieve many, with opaque filter parameters
//!     let high_scores = client
//!         .retrieve_many::<GameScore>(
//!             "GameScore",
//!             QueryParams::new().append("where", r#"{"score":{"$gt":1000}}"#),
//!         )
//!         .await?;
//!
//!     // Update
//!     client
//!         .update("GameScore", &ack.object_id, &serde_json::json!({"score": 2674}), QueryParams::new())
//!         .await?;
//!
//!     // Delete
//!     client.delete("GameScore", &ack.object_id, QueryParams::new()).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod executor;
mod query;
mod types;

// Main client
pub use client::Cirro;

// Error types
pub use error::{ApiError, Error, ErrorKind, ErrorPayload, Result};

// Query parameters
pub use query::QueryParams;

// Acknowledgment and collection types
pub use types::{CreateAck, ListResults, UpdateAck};

// Re-export cirro-client types callers need at construction time or when
// supplying their own transport.
pub use cirro_client::{
    ClientConfig, ClientConfigBuilder, HttpTransport, RequestMethod, Transport, TransportRequest,
    TransportResponse,
};

/// Header carrying the application identifier.
pub const APPLICATION_ID_HEADER: &str = "X-Cirro-Application-Id";

/// Header carrying the REST API key.
pub const API_KEY_HEADER: &str = "X-Cirro-REST-API-Key";
