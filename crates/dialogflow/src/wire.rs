//! Dialogflow v2 webhook wire types
//!
//! Typed views of the webhook request and response bodies. Only the fields
//! the adapter consumes are modeled; the embedded platform payloads flow
//! through as opaque JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named, TTL-bearing context record
///
/// Context names always take the form `"<sessionId>/contexts/<contextId>"`.
/// Within one `outputContexts` list at most one context carries a given
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Fully qualified context name
    pub name: String,
    /// Remaining turn-count before the context expires
    #[serde(default)]
    pub lifespan_count: u32,
    /// Parameters carried by the context
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Context {
    pub fn new(name: impl Into<String>, lifespan_count: u32, parameters: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            lifespan_count,
            parameters,
        }
    }
}

/// Intent metadata inside `queryResult`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    /// Intent display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the provider matched its fallback intent
    #[serde(default)]
    pub is_fallback: bool,
}

/// The `queryResult` block of a webhook request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub intent: Option<IntentInfo>,
    /// Recognized slot parameters, unordered
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Contexts the provider echoes back on every call
    #[serde(default)]
    pub output_contexts: Option<Vec<Context>>,
}

/// The `originalDetectIntentRequest` wrapper
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalDetectIntentRequest {
    /// Platform the request originated from (e.g. "google")
    #[serde(default)]
    pub source: Option<String>,
    /// Opaque sub-payload owned by the platform's own codec
    #[serde(default)]
    pub payload: Value,
}

/// Webhook request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Provider-scoped, path-like session identifier
    pub session: String,
    pub query_result: QueryResult,
    pub original_detect_intent_request: OriginalDetectIntentRequest,
}

/// Webhook response body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Speech-markup-wrapped utterance; omitted for silent turns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,
    /// Contexts after session export
    pub output_contexts: Vec<Context>,
    /// Platform payload keyed by the configured platform id
    pub payload: Map<String, Value>,
}
