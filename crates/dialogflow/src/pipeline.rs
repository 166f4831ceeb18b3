//! Per-turn pipeline over the adapter stages
//!
//! The host dispatcher invokes the entry points in a fixed order, exactly
//! once per turn:
//!
//! 1. [`DialogflowNlu::detect`] — shape detection and normalization
//! 2. [`DialogflowNlu::classify_turn`] — turn type and resolved intent
//! 3. [`DialogflowNlu::extract_inputs`] — slot normalization
//! 4. [`DialogflowNlu::import_session`] — session snapshot
//! 5. (host business logic mutates the turn)
//! 6. [`DialogflowNlu::export_session`] — contexts updated
//! 7. [`DialogflowNlu::compose`] — response envelope, awaiting the codec
//!
//! A [`Turn`] owns all of its state; nothing is shared across concurrent
//! turns, so no locking is needed.

use nlu_adapter_core::{
    InputMap, RequestCodec, RequestType, ResolvedIntent, ResponseCodec, Result, SessionData,
    SpeechOutput,
};
use serde_json::Value;

use crate::config::DialogflowConfig;
use crate::request::{self, Detection, IncomingRequest};
use crate::wire::{Context, WebhookResponse};
use crate::{inputs, intent, response, session};

/// State owned by one conversational turn
#[derive(Debug)]
pub struct Turn {
    /// The parsed webhook request, immutable once built
    pub request: IncomingRequest,
    /// Turn type assigned by classification
    pub request_type: RequestType,
    /// Intent resolved for `Intent`-type turns
    pub intent: Option<ResolvedIntent>,
    /// Normalized slot inputs
    pub inputs: InputMap,
    /// Session data for this turn; business logic mutates this copy
    pub session_data: SessionData,
    /// Platform request decoded from the embedded payload
    pub platform_request: Option<Value>,
    /// Snapshot of the session data as imported
    imported: SessionData,
}

impl Turn {
    fn new(request: IncomingRequest) -> Self {
        Self {
            request,
            request_type: RequestType::Undefined,
            intent: None,
            inputs: InputMap::new(),
            session_data: SessionData::new(),
            platform_request: None,
            imported: SessionData::new(),
        }
    }

    /// Session data exactly as imported, unaffected by later mutation
    pub fn imported_session(&self) -> &SessionData {
        &self.imported
    }
}

/// Dialogflow NLU adapter
///
/// Stateless across turns: one instance serves any number of concurrent
/// turns, each carried by its own [`Turn`].
pub struct DialogflowNlu {
    config: DialogflowConfig,
}

impl DialogflowNlu {
    pub fn new(config: DialogflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialogflowConfig {
        &self.config
    }

    /// Shape detection and normalization
    ///
    /// [`Detection::NotApplicable`] short-circuits the pipeline for this
    /// turn; the host routes the payload elsewhere instead of reporting an
    /// error.
    pub fn detect(&self, raw: &Value) -> Detection {
        request::parse(raw)
    }

    /// Builds the per-turn state from a parsed request
    pub fn begin_turn(&self, request: IncomingRequest) -> Turn {
        Turn::new(request)
    }

    /// Turn-type classification and intent resolution
    pub fn classify_turn(&self, turn: &mut Turn) {
        turn.request_type = intent::classify(
            turn.request.intent_name.as_deref(),
            turn.request.is_fallback,
            turn.request_type,
        );
        turn.intent = match turn.request_type {
            RequestType::Intent => turn
                .request
                .intent_name
                .clone()
                .map(ResolvedIntent::new),
            _ => None,
        };
        tracing::debug!(
            session_id = %turn.request.session_id,
            request_type = %turn.request_type,
            "classified turn"
        );
    }

    /// Slot parameter normalization
    pub fn extract_inputs(&self, turn: &mut Turn) {
        turn.inputs = inputs::map_inputs(&turn.request.parameters);
    }

    /// Decodes the opaque embedded payload through the external request
    /// codec and stores the platform request on the turn
    pub async fn decode_platform_request(
        &self,
        turn: &mut Turn,
        codec: &dyn RequestCodec,
    ) -> Result<()> {
        let decoded = codec.decode(turn.request.embedded_payload.clone()).await?;
        turn.platform_request = Some(decoded);
        Ok(())
    }

    /// Session import: snapshot durable data, strip recognition artifacts
    pub fn import_session(&self, turn: &mut Turn) {
        let recognized: Vec<&str> = turn.request.parameters.keys().map(String::as_str).collect();
        let data = session::import_session(
            &turn.request.output_contexts,
            &turn.request.session_id,
            &self.config.session_context_id,
            recognized,
        );
        turn.imported = data.clone();
        turn.session_data = data;
    }

    /// Session export: write the turn's session data back into the
    /// context list
    pub fn export_session(&self, turn: &Turn) -> Vec<Context> {
        session::export_session(
            turn.request.output_contexts.clone(),
            &turn.request.session_id,
            &self.config.session_context_id,
            &turn.session_data,
        )
    }

    /// Response composition
    ///
    /// Awaits the external response codec; a codec failure propagates
    /// unchanged to the caller.
    pub async fn compose(
        &self,
        speech: &SpeechOutput,
        contexts: Vec<Context>,
        generic_response: Value,
        codec: &dyn ResponseCodec,
    ) -> Result<WebhookResponse> {
        let payload = codec.encode(generic_response).await?;
        Ok(response::compose(
            speech,
            contexts,
            payload,
            &self.config.platform_id,
        ))
    }
}

impl Default for DialogflowNlu {
    fn default() -> Self {
        Self::new(DialogflowConfig::default())
    }
}
