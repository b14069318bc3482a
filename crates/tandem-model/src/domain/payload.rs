use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One trial configuration submitted to the experiment host.
///
/// The payload is opaque to the run loop; identity is the position in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(pub Value);

/// Result recorded by the host for one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation(pub Value);

/// Observations as returned by the host, keyed by the host-assigned condition key.
pub type ObservationMap = HashMap<String, Observation>;

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        Condition(value)
    }
}

impl From<Value> for Observation {
    fn from(value: Value) -> Self {
        Observation(value)
    }
}

impl Condition {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Observation {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn condition_serializes_without_wrapper() {
        let c = Condition::from(json!({"stimulus": "red", "soa": 120}));
        let s = serde_json::to_string(&c).unwrap();
        assert_eq!(s, r#"{"soa":120,"stimulus":"red"}"#);
    }

    #[test]
    fn observation_map_deserializes_from_object() {
        let map: ObservationMap =
            serde_json::from_value(json!({"0": {"rt": 512}, "1": [1, 2]})).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["1"], Observation(json!([1, 2])));
    }
}
