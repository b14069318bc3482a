//! Ordering of fetched observations.
//!
//! Keys are sorted by plain string order, so `"c10"` comes before `"c2"`.
//! Callers rely on the host assigning keys whose sorted order matches the
//! order of the submitted batch.

use tandem_model::{Observation, ObservationMap};

/// Observations ordered by key, leaving the map untouched.
pub fn aggregate(observations: &ObservationMap) -> Vec<Observation> {
    let mut keys: Vec<&String> = observations.keys().collect();
    keys.sort_unstable();
    keys.into_iter()
        .map(|key| observations[key].clone())
        .collect()
}

/// Consuming variant of [`aggregate`].
pub fn into_ordered(observations: ObservationMap) -> Vec<Observation> {
    let mut entries: Vec<(String, Observation)> = observations.into_iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(_, obs)| obs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obs(v: &str) -> Observation {
        Observation(json!(v))
    }

    fn map(pairs: &[(&str, &str)]) -> ObservationMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), obs(v)))
            .collect()
    }

    #[test]
    fn sorts_keys_lexicographically() {
        let m = map(&[("c2", "O2"), ("c1", "O1"), ("c10", "O10")]);
        assert_eq!(aggregate(&m), vec![obs("O1"), obs("O10"), obs("O2")]);
    }

    #[test]
    fn independent_of_insertion_order() {
        let a = map(&[("c2", "O2"), ("c1", "O1"), ("c10", "O10")]);
        let b = map(&[("c10", "O10"), ("c2", "O2"), ("c1", "O1")]);
        assert_eq!(aggregate(&a), aggregate(&b));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let m = map(&[("b", "1"), ("a", "0"), ("c", "2")]);
        let first = aggregate(&m);
        let second = aggregate(&m);
        assert_eq!(first, second);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn consuming_variant_matches() {
        let m = map(&[("c2", "O2"), ("c1", "O1"), ("c10", "O10")]);
        let borrowed = aggregate(&m);
        assert_eq!(into_ordered(m), borrowed);
    }

    #[test]
    fn empty_map_yields_empty_sequence() {
        assert!(aggregate(&ObservationMap::new()).is_empty());
    }
}
