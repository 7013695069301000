//! Wire types for the gateway surface and the backend contract

use serde::{Deserialize, Serialize};

/// A fortune record owned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fortune {
    /// Backend-assigned identity
    pub id: String,

    /// The fortune text
    pub message: String,
}

/// Client-submitted payload for a new fortune; the id is synthesized
/// by the gateway before forwarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFortuneRequest {
    /// The fortune text
    pub message: String,
}

/// Payload forwarded to the backend when adding a fortune
///
/// The id is a random integer in [0, 10000), not collision-checked;
/// uniqueness is the backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFortune {
    /// Synthesized advisory id
    pub id: u32,

    /// The fortune text
    pub message: String,
}
