//! Session data reconciliation against named contexts
//!
//! Dialogflow has no session store of its own: durable session data rides
//! in a named context record the provider echoes back on every call.
//! Import pulls that record into a per-turn mapping, stripping the
//! transient recognition artifacts the provider re-injects into every
//! context. Export writes the updated mapping back into the list.
//!
//! Both operations are pure: they never mutate state reachable through a
//! shared reference, so an imported snapshot can never alias the live
//! context list.

use nlu_adapter_core::SessionData;

use crate::wire::Context;

/// Lifespan for the session context: effectively persist-until-cleared
pub const SESSION_LIFESPAN: u32 = 1000;

/// Builds the provider's fully qualified context name
pub fn context_name(session_id: &str, context_id: &str) -> String {
    format!("{session_id}/contexts/{context_id}")
}

/// Imports durable session data from the provider's context list
///
/// No matching context yields an empty mapping. Otherwise the context's
/// parameters are cloned and every recognized slot name, plus its
/// `"<name>.original"` companion, is removed: those are per-turn
/// recognition artifacts, not durable state. The result is an independent
/// snapshot sharing no storage with the context list.
pub fn import_session<'a, I>(
    contexts: &[Context],
    session_id: &str,
    context_id: &str,
    recognized_names: I,
) -> SessionData
where
    I: IntoIterator<Item = &'a str>,
{
    let name = context_name(session_id, context_id);
    let Some(context) = contexts.iter().find(|c| c.name == name) else {
        return SessionData::new();
    };

    let mut data = context.parameters.clone();
    for key in recognized_names {
        data.remove(key);
        data.remove(&format!("{key}.original"));
    }
    tracing::debug!(session_id = %session_id, keys = data.len(), "imported session data");
    data
}

/// Exports updated session data back into the context list
///
/// Empty session data returns the list unchanged, adding nothing. Otherwise
/// the matching context's parameters are replaced in place, or a new
/// context is appended with the fixed session lifespan. The result never
/// carries two entries with the same name.
pub fn export_session(
    mut contexts: Vec<Context>,
    session_id: &str,
    context_id: &str,
    session_data: &SessionData,
) -> Vec<Context> {
    if session_data.is_empty() {
        return contexts;
    }

    let name = context_name(session_id, context_id);
    match contexts.iter_mut().find(|c| c.name == name) {
        Some(existing) => {
            existing.parameters = session_data.clone();
        }
        None => {
            tracing::debug!(session_id = %session_id, context = %name, "appending session context");
            contexts.push(Context::new(name, SESSION_LIFESPAN, session_data.clone()));
        }
    }
    contexts
}
