//! Outgoing webhook envelope assembly

use nlu_adapter_core::SpeechOutput;
use serde_json::{Map, Value};

use crate::wire::{Context, WebhookResponse};

/// Wraps an utterance in the provider's speech markup
fn speak(utterance: &str) -> String {
    format!("<speak>{utterance}</speak>")
}

/// Assembles the outgoing webhook response
///
/// The utterance, if any, lands speech-markup-wrapped in
/// `fulfillment_text`; a silent turn omits the field. The contexts are
/// attached verbatim (session export has already run), and the embedded
/// payload (already encoded by the external response codec) is nested
/// under the configured platform id. No codec conversion happens here.
pub fn compose(
    speech: &SpeechOutput,
    contexts: Vec<Context>,
    embedded_payload: Value,
    platform_id: &str,
) -> WebhookResponse {
    let mut payload = Map::new();
    payload.insert(platform_id.to_string(), embedded_payload);

    WebhookResponse {
        fulfillment_text: speech.utterance().map(speak),
        output_contexts: contexts,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tell_is_markup_wrapped() {
        let response = compose(&SpeechOutput::tell("Goodbye"), Vec::new(), json!({}), "google");
        assert_eq!(response.fulfillment_text.as_deref(), Some("<speak>Goodbye</speak>"));
    }

    #[test]
    fn test_ask_is_markup_wrapped() {
        let response = compose(
            &SpeechOutput::ask("Which city?"),
            Vec::new(),
            json!({}),
            "google",
        );
        assert_eq!(
            response.fulfillment_text.as_deref(),
            Some("<speak>Which city?</speak>")
        );
    }

    #[test]
    fn test_silent_turn_omits_fulfillment() {
        let response = compose(&SpeechOutput::silent(), Vec::new(), json!({}), "google");
        assert!(response.fulfillment_text.is_none());
    }

    #[test]
    fn test_payload_nested_under_platform_id() {
        let response = compose(
            &SpeechOutput::silent(),
            Vec::new(),
            json!({"expectUserResponse": true}),
            "google",
        );
        assert_eq!(
            response.payload.get("google"),
            Some(&json!({"expectUserResponse": true}))
        );
    }

    #[test]
    fn test_contexts_attached_verbatim() {
        let contexts = vec![Context::new(
            "s1/contexts/session",
            1000,
            json!({"count": 3}).as_object().unwrap().clone(),
        )];
        let response = compose(&SpeechOutput::silent(), contexts.clone(), json!({}), "google");
        assert_eq!(response.output_contexts, contexts);
    }
}
