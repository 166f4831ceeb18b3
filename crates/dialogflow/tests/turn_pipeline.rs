//! Full turn pipeline: detect → classify → inputs → session import →
//! business logic → session export → compose, in the host dispatcher's
//! fixed order.

use async_trait::async_trait;
use nlu_adapter_core::{Error, RequestCodec, RequestType, ResponseCodec, Result, SpeechOutput};
use nlu_adapter_dialogflow::{Detection, DialogflowNlu, SESSION_LIFESPAN};
use serde_json::{json, Value};

/// Stand-in for the external platform codec: passes payloads through
struct PassthroughCodec;

#[async_trait]
impl RequestCodec for PassthroughCodec {
    async fn decode(&self, payload: Value) -> Result<Value> {
        Ok(payload)
    }
}

#[async_trait]
impl ResponseCodec for PassthroughCodec {
    async fn encode(&self, response: Value) -> Result<Value> {
        Ok(response)
    }
}

/// Codec that always fails, for error propagation tests
struct BrokenCodec;

#[async_trait]
impl ResponseCodec for BrokenCodec {
    async fn encode(&self, _response: Value) -> Result<Value> {
        Err(Error::codec(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "encode failed",
        )))
    }
}

fn weather_request() -> Value {
    json!({
        "session": "projects/p/agent/sessions/s1",
        "queryResult": {
            "intent": {"displayName": "GetWeather", "isFallback": false},
            "parameters": {"city": "Berlin"},
            "outputContexts": [{
                "name": "projects/p/agent/sessions/s1/contexts/session",
                "lifespanCount": 1000,
                "parameters": {
                    "count": 3,
                    "city": "Berlin",
                    "city.original": "berlin"
                }
            }]
        },
        "originalDetectIntentRequest": {
            "source": "google",
            "payload": {"inputs": []}
        }
    })
}

#[tokio::test]
async fn full_turn_round_trip() {
    let adapter = DialogflowNlu::default();

    // 1. detect
    let request = adapter
        .detect(&weather_request())
        .into_request()
        .expect("dialogflow request should be detected");
    let mut turn = adapter.begin_turn(request);

    // 2. classify
    adapter.classify_turn(&mut turn);
    assert_eq!(turn.request_type, RequestType::Intent);
    assert_eq!(turn.intent.as_ref().unwrap().name, "GetWeather");

    // 3. inputs
    adapter.extract_inputs(&mut turn);
    assert_eq!(turn.inputs["city"].value, json!("Berlin"));

    // request codec wiring
    adapter
        .decode_platform_request(&mut turn, &PassthroughCodec)
        .await
        .unwrap();
    assert_eq!(turn.platform_request, Some(json!({"inputs": []})));

    // 4. import: recognition artifacts stripped, durable data kept
    adapter.import_session(&mut turn);
    assert_eq!(turn.session_data.get("count"), Some(&json!(3)));
    assert!(!turn.session_data.contains_key("city"));
    assert!(!turn.session_data.contains_key("city.original"));

    // 5. business logic
    turn.session_data.insert("count".to_string(), json!(4));
    let speech = SpeechOutput::ask("It is sunny in Berlin. Anything else?");

    // 6. export: matching context replaced in place
    let contexts = adapter.export_session(&turn);
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].parameters.get("count"), Some(&json!(4)));

    // 7. compose
    let response = adapter
        .compose(&speech, contexts, json!({"expectUserResponse": true}), &PassthroughCodec)
        .await
        .unwrap();

    assert_eq!(
        response.fulfillment_text.as_deref(),
        Some("<speak>It is sunny in Berlin. Anything else?</speak>")
    );
    assert_eq!(response.output_contexts.len(), 1);
    assert_eq!(
        response.payload.get("google"),
        Some(&json!({"expectUserResponse": true}))
    );
}

#[tokio::test]
async fn launch_turn_creates_session_context() {
    let adapter = DialogflowNlu::default();
    let body = json!({
        "session": "projects/p/agent/sessions/s2",
        "queryResult": {
            "intent": {"displayName": "Default Welcome Intent", "isFallback": false},
            "parameters": {},
            "outputContexts": []
        },
        "originalDetectIntentRequest": {"source": "google", "payload": {}}
    });

    let request = adapter.detect(&body).into_request().unwrap();
    let mut turn = adapter.begin_turn(request);
    adapter.classify_turn(&mut turn);
    assert_eq!(turn.request_type, RequestType::Launch);

    adapter.extract_inputs(&mut turn);
    adapter.import_session(&mut turn);
    assert!(turn.session_data.is_empty());

    turn.session_data.insert("greeted".to_string(), json!(true));
    let contexts = adapter.export_session(&turn);
    assert_eq!(contexts.len(), 1);
    assert_eq!(
        contexts[0].name,
        "projects/p/agent/sessions/s2/contexts/session"
    );
    assert_eq!(contexts[0].lifespan_count, SESSION_LIFESPAN);
}

#[tokio::test]
async fn silent_turn_with_untouched_session() {
    let adapter = DialogflowNlu::default();
    let request = adapter.detect(&weather_request()).into_request().unwrap();
    let mut turn = adapter.begin_turn(request);
    adapter.classify_turn(&mut turn);
    adapter.extract_inputs(&mut turn);
    adapter.import_session(&mut turn);

    // business logic neither speaks nor touches the session
    let contexts = adapter.export_session(&turn);
    let response = adapter
        .compose(&SpeechOutput::silent(), contexts, json!({}), &PassthroughCodec)
        .await
        .unwrap();

    assert!(response.fulfillment_text.is_none());
    // imported data re-exported into the matched context
    assert_eq!(response.output_contexts[0].parameters.get("count"), Some(&json!(3)));
}

#[test]
fn foreign_payload_skips_the_adapter() {
    let adapter = DialogflowNlu::default();
    let alexa_ish = json!({
        "version": "1.0",
        "request": {"type": "IntentRequest"}
    });
    assert!(matches!(adapter.detect(&alexa_ish), Detection::NotApplicable));
}

#[test]
fn ill_typed_body_is_malformed_not_skipped() {
    let adapter = DialogflowNlu::default();
    let body = json!({
        "session": ["not", "a", "string"],
        "queryResult": {},
        "originalDetectIntentRequest": {}
    });
    assert!(matches!(adapter.detect(&body), Detection::Malformed(_)));
}

#[tokio::test]
async fn codec_failure_propagates_unchanged() {
    let adapter = DialogflowNlu::default();
    let result = adapter
        .compose(&SpeechOutput::tell("Bye"), Vec::new(), json!({}), &BrokenCodec)
        .await;
    assert!(matches!(result, Err(Error::Codec(_))));
}
