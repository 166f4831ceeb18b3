//! Request shape detection and normalization
//!
//! The first pipeline stage. A payload that is not a Dialogflow webhook
//! request short-circuits the whole pipeline for the turn; the host routes
//! it to another adapter instead of reporting an error.

use serde_json::{Map, Value};

use crate::wire::{Context, WebhookRequest};

/// Outcome of shape detection on a raw webhook body
#[derive(Debug)]
pub enum Detection {
    /// The payload belongs to this provider and decoded cleanly
    Ok(IncomingRequest),
    /// Not a Dialogflow request; the host should try another adapter
    NotApplicable,
    /// Dialogflow shape markers present but the body does not decode;
    /// the turn is not handled by this adapter
    Malformed(String),
}

impl Detection {
    /// Unwrap the parsed request, if detection succeeded
    pub fn into_request(self) -> Option<IncomingRequest> {
        match self {
            Detection::Ok(request) => Some(request),
            _ => None,
        }
    }

    /// Convert into the host-facing result shape
    ///
    /// `Ok(None)` means "skip this adapter"; a malformed body becomes a
    /// [`nlu_adapter_core::Error::MalformedRequest`] so the host can log
    /// it without surfacing anything to the end user.
    pub fn into_result(self) -> nlu_adapter_core::Result<Option<IncomingRequest>> {
        match self {
            Detection::Ok(request) => Ok(Some(request)),
            Detection::NotApplicable => Ok(None),
            Detection::Malformed(reason) => {
                Err(nlu_adapter_core::Error::MalformedRequest(reason))
            }
        }
    }
}

/// One parsed webhook request, immutable once built
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    /// Provider-scoped, path-like session identifier
    pub session_id: String,
    /// Intent display name, if the provider resolved one
    pub intent_name: Option<String>,
    /// Whether the provider matched its fallback intent
    pub is_fallback: bool,
    /// Recognized slot parameters, unordered
    pub parameters: Map<String, Value>,
    /// Contexts echoed back by the provider; always a list, never null
    pub output_contexts: Vec<Context>,
    /// Platform the request originated from
    pub source: Option<String>,
    /// Opaque sub-payload for the platform's own request codec
    pub embedded_payload: Value,
}

/// Parses a raw webhook body into a structured request view
///
/// Pure, side-effect-free transform. Three shape markers decide whether
/// the payload belongs to this provider at all: `queryResult`,
/// `originalDetectIntentRequest` and `session`.
pub fn parse(raw: &Value) -> Detection {
    let has_markers = raw.get("queryResult").is_some()
        && raw.get("originalDetectIntentRequest").is_some()
        && raw.get("session").is_some();
    if !has_markers {
        tracing::debug!("payload missing dialogflow shape markers, skipping adapter");
        return Detection::NotApplicable;
    }

    let request: WebhookRequest = match serde_json::from_value(raw.clone()) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "dialogflow-shaped payload failed to decode");
            return Detection::Malformed(err.to_string());
        }
    };

    let intent = request.query_result.intent;
    Detection::Ok(IncomingRequest {
        session_id: request.session,
        intent_name: intent.as_ref().and_then(|i| i.display_name.clone()),
        is_fallback: intent.as_ref().map(|i| i.is_fallback).unwrap_or(false),
        parameters: request.query_result.parameters,
        // downstream stages require a concrete list
        output_contexts: request.query_result.output_contexts.unwrap_or_default(),
        source: request.original_detect_intent_request.source,
        embedded_payload: request.original_detect_intent_request.payload,
    })
}
