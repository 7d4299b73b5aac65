//! Error types for cirro-rest.
//!
//! The REST surface shares the error taxonomy of `cirro-client` so callers
//! see a single error type across both crates: transport failures, decode
//! failures, and remote rejections ([`ApiError`]) all arrive as [`Error`].

pub use cirro_client::{ApiError, Error, ErrorKind, ErrorPayload, Result};
