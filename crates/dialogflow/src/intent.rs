//! Turn-type classification from intent metadata

use nlu_adapter_core::RequestType;

/// Reserved intent name that opens a session
pub const WELCOME_INTENT: &str = "Default Welcome Intent";
/// Reserved intent name the provider emits when nothing matched
pub const FALLBACK_INTENT: &str = "Default Fallback Intent";

/// Maps intent metadata to a turn type
///
/// Evaluated in priority order:
/// 1. The welcome intent always classifies as `Launch`.
/// 2. Any other non-fallback-flagged intent classifies as `Intent`, except
///    that the fallback intent name keeps an already assigned `prior` type
///    so a re-dispatched turn is not reclassified.
/// 3. A fallback-flagged turn leaves `prior` untouched; unset means the
///    host's default handling applies.
///
/// Deterministic: identical inputs always yield the same type.
pub fn classify(intent_name: Option<&str>, is_fallback: bool, prior: RequestType) -> RequestType {
    let Some(name) = intent_name else {
        // no resolvable intent; non-fatal, defer to the host
        return prior;
    };

    if name == WELCOME_INTENT {
        return RequestType::Launch;
    }

    if !is_fallback {
        if name == FALLBACK_INTENT && prior.is_assigned() {
            return prior;
        }
        return RequestType::Intent;
    }

    prior
}
