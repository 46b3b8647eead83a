//! Structural decoding for results that carry no discriminator field
//!
//! A polymorphic result is buffered once as a [`Value`] and then probed
//! against each candidate shape in priority order. Probing borrows the
//! buffered value, so a failed attempt leaves nothing behind for the next.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode `value` as `T` without consuming it.
pub(crate) fn probe<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Convert a probing failure into the error type of the outer deserializer.
pub(crate) fn into_de_error<E: serde::de::Error>(err: serde_json::Error) -> E {
    E::custom(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probe_leaves_value_intact() {
        let value = json!({"a": 1});
        assert!(probe::<bool>(&value).is_err());
        let map: serde_json::Map<String, Value> = probe(&value).unwrap();
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn test_probe_checks_integer_range() {
        assert_eq!(probe::<u32>(&json!(7)).unwrap(), 7);
        assert!(probe::<u32>(&json!(u64::MAX)).is_err());
        assert!(probe::<u32>(&json!("7")).is_err());
    }
}
