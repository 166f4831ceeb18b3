//! Core types for the NLU adapter
//!
//! This crate provides the provider-agnostic pieces shared by provider
//! adapters and the host dispatcher:
//! - Per-turn types (request type, normalized inputs, speech output)
//! - Session data mapping
//! - External codec collaborator traits
//! - Error types

pub mod codec;
pub mod error;
pub mod turn;

pub use codec::{RequestCodec, ResponseCodec};
pub use error::{Error, Result};
pub use turn::{
    InputMap, NormalizedInput, RequestType, ResolvedIntent, SessionData, SpeechOutput,
};
