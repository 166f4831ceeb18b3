//! Adapter configuration

use serde::{Deserialize, Serialize};

/// Dialogflow adapter configuration
///
/// Supplied by the host at install time; every field has a working
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogflowConfig {
    /// Context id that carries durable session data across turns
    pub session_context_id: String,
    /// Key the opaque platform payload is nested under in the response
    pub platform_id: String,
}

impl Default for DialogflowConfig {
    fn default() -> Self {
        Self {
            session_context_id: "session".to_string(),
            platform_id: "google".to_string(),
        }
    }
}
