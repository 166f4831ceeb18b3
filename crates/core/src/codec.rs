//! External provider codec contracts
//!
//! The embedded payload inside a webhook request, and the platform payload
//! inside the response, are owned by a provider-specific codec outside this
//! core. The adapter passes them through unexamined.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Decodes the opaque embedded request payload into the platform's own
/// request shape
#[async_trait]
pub trait RequestCodec: Send + Sync {
    async fn decode(&self, payload: Value) -> Result<Value>;
}

/// Encodes the generic response into the platform's own payload shape
#[async_trait]
pub trait ResponseCodec: Send + Sync {
    async fn encode(&self, response: Value) -> Result<Value>;
}
