//! Dialogflow webhook adapter
//!
//! Translates between the Dialogflow v2 webhook contract and the generic
//! per-turn conversation abstraction the host dispatcher consumes:
//! - Request shape detection and normalization
//! - Turn-type classification
//! - Slot parameter normalization
//! - Session data reconciliation against named, TTL-bearing contexts
//! - Response envelope assembly
//!
//! Transport, authentication, and the platform's own request/response
//! codecs live outside this crate; the codecs plug in through the traits
//! in `nlu-adapter-core`.

pub mod config;
pub mod inputs;
pub mod intent;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod session;
pub mod wire;

pub use config::DialogflowConfig;
pub use intent::{FALLBACK_INTENT, WELCOME_INTENT};
pub use pipeline::{DialogflowNlu, Turn};
pub use request::{Detection, IncomingRequest};
pub use session::{context_name, export_session, import_session, SESSION_LIFESPAN};
pub use wire::{Context, WebhookRequest, WebhookResponse};

pub use nlu_adapter_core::{Error, Result};
