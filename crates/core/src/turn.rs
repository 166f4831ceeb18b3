//! Per-turn conversation types
//!
//! One turn is a single request/response cycle. Everything here is owned
//! by the turn's pipeline instance; nothing is shared across concurrent
//! turns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Turn type assigned by intent classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Session-opening turn (welcome intent)
    Launch,
    /// Regular intent turn
    Intent,
    /// No classification; the host's default handling applies
    #[default]
    Undefined,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Launch => "launch",
            RequestType::Intent => "intent",
            RequestType::Undefined => "undefined",
        }
    }

    /// Whether a type has been assigned to the turn
    pub fn is_assigned(&self) -> bool {
        !matches!(self, RequestType::Undefined)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recognized slot value normalized into the cross-provider input record
///
/// `key` and `id` mirror `value`: downstream consumers expect slot identity
/// fields even when the provider has none of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInput {
    /// Slot name
    pub name: String,
    /// Recognized value
    pub value: Value,
    /// Identity field, mirrors `value`
    pub key: Value,
    /// Identity field, mirrors `value`
    pub id: Value,
}

impl NormalizedInput {
    /// Create an input record from a slot name and its recognized value
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            key: value.clone(),
            id: value.clone(),
            value,
        }
    }
}

/// Normalized slot inputs for one turn, keyed by slot name
pub type InputMap = HashMap<String, NormalizedInput>;

/// Mutable session data scoped to exactly one turn
pub type SessionData = serde_json::Map<String, Value>;

/// Intent resolved for an `Intent`-type turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIntent {
    /// Intent display name as reported by the provider
    pub name: String,
}

impl ResolvedIntent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Speech produced by the host's business logic for one turn
///
/// Carries at most one of `tell` (terminal) or `ask` (continuing). Neither
/// present means a silent/continued turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechOutput {
    /// Terminal utterance; the session ends after it is spoken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tell: Option<String>,
    /// Continuing utterance; the session stays open for another turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<String>,
}

impl SpeechOutput {
    /// A silent turn with no utterance
    pub fn silent() -> Self {
        Self::default()
    }

    /// A terminal utterance
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            tell: Some(speech.into()),
            ask: None,
        }
    }

    /// A continuing utterance
    pub fn ask(speech: impl Into<String>) -> Self {
        Self {
            tell: None,
            ask: Some(speech.into()),
        }
    }

    /// The utterance to speak, if any
    ///
    /// `ask` takes precedence when both are set, matching last-write-wins
    /// ordering of the upstream output stage.
    pub fn utterance(&self) -> Option<&str> {
        self.ask.as_deref().or(self.tell.as_deref())
    }

    pub fn is_silent(&self) -> bool {
        self.utterance().is_none()
    }
}
