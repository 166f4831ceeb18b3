//! Slot parameter normalization

use nlu_adapter_core::{InputMap, NormalizedInput};
use serde_json::{Map, Value};

/// Converts the recognized slot map into canonical input records
///
/// Total and pure: exactly one record per key, with `key` and `id`
/// mirroring the value. No filtering; the output container carries no
/// ordering guarantee.
pub fn map_inputs(parameters: &Map<String, Value>) -> InputMap {
    parameters
        .iter()
        .map(|(name, value)| {
            (
                name.clone(),
                NormalizedInput::new(name.clone(), value.clone()),
            )
        })
        .collect()
}
