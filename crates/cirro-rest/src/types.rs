//! Typed response shapes for the REST surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgment of a successful create.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateAck {
    /// Identifier the service generated for the new object.
    #[serde(rename = "objectId")]
    pub object_id: String,
    /// When the object was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Acknowledgment of a successful update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateAck {
    /// When the object was last written.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The wrapped collection shape returned by retrieve-many.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListResults<T> {
    /// The matching records.
    pub results: Vec<T>,
    /// Total match count, present when the request asked the service to
    /// count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}
