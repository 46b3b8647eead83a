//! Mempool information model

use super::decode::{into_de_error, probe};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fee-per-byte thresholds (in Luna) the node sorts pending transactions into
pub const MEMPOOL_BUCKETS: [u32; 14] = [
    10000, 5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5, 2, 1, 0,
];

/// Mempool overview returned by `mempool`.
///
/// The node reports the per-bucket counts as numeric keys next to `total`
/// and `buckets`. Only the buckets present in the response end up in
/// `transactions_per_bucket`; missing ones are not filled with zero.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MempoolInfo {
    pub total: u32,
    pub buckets: Vec<u32>,
    #[serde(flatten)]
    pub transactions_per_bucket: BTreeMap<u32, u32>,
}

impl<'de> Deserialize<'de> for MempoolInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        let total = object
            .remove("total")
            .ok_or_else(|| D::Error::missing_field("total"))?;
        let total = probe::<u32>(&total).map_err(into_de_error)?;

        let buckets = object
            .remove("buckets")
            .ok_or_else(|| D::Error::missing_field("buckets"))?;
        let buckets: Vec<u32> = probe(&buckets).map_err(into_de_error)?;

        let mut transactions_per_bucket = BTreeMap::new();
        for (key, value) in &object {
            let Ok(bucket) = key.parse::<u32>() else {
                continue;
            };
            if !MEMPOOL_BUCKETS.contains(&bucket) {
                continue;
            }
            let count = probe::<u32>(value).map_err(|e| {
                D::Error::custom(format!("invalid count for bucket {bucket}: {e}"))
            })?;
            transactions_per_bucket.insert(bucket, count);
        }

        Ok(Self {
            total,
            buckets,
            transactions_per_bucket,
        })
    }
}

impl MempoolInfo {
    /// Number of pending transactions in the bucket for `fee_per_byte`, if
    /// the node reported that bucket
    pub fn count_for_bucket(&self, fee_per_byte: u32) -> Option<u32> {
        self.transactions_per_bucket.get(&fee_per_byte).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_buckets() {
        let info: MempoolInfo =
            serde_json::from_value(json!({"total": 3, "buckets": [2, 0], "0": 2, "2": 1})).unwrap();

        assert_eq!(info.total, 3);
        assert_eq!(info.buckets, vec![2, 0]);
        assert_eq!(info.transactions_per_bucket, BTreeMap::from([(0, 2), (2, 1)]));
        assert_eq!(info.count_for_bucket(2), Some(1));
        assert_eq!(info.count_for_bucket(1), None);
    }

    #[test]
    fn test_empty_mempool() {
        let info: MempoolInfo =
            serde_json::from_value(json!({"total": 0, "buckets": []})).unwrap();
        assert_eq!(info.total, 0);
        assert!(info.transactions_per_bucket.is_empty());
    }

    #[test]
    fn test_ignores_keys_outside_allow_list() {
        let info: MempoolInfo = serde_json::from_value(json!({
            "total": 4,
            "buckets": [10000, 3],
            "10000": 3,
            "3": 7,
            "extra": "ignored",
            "1": 1
        }))
        .unwrap();

        assert_eq!(info.transactions_per_bucket, BTreeMap::from([(1, 1), (10000, 3)]));
    }

    #[test]
    fn test_missing_named_fields() {
        assert!(serde_json::from_value::<MempoolInfo>(json!({"buckets": []})).is_err());
        assert!(serde_json::from_value::<MempoolInfo>(json!({"total": 1})).is_err());
        assert!(serde_json::from_value::<MempoolInfo>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_invalid_bucket_count() {
        let result = serde_json::from_value::<MempoolInfo>(json!({
            "total": 1,
            "buckets": [5],
            "5": "one"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<MempoolInfo>(json!({
            "total": 1,
            "buckets": [5],
            "5": 4294967296u64
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_buckets_as_sibling_keys() {
        let info: MempoolInfo =
            serde_json::from_value(json!({"total": 3, "buckets": [2, 0], "0": 2, "2": 1})).unwrap();
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"total": 3, "buckets": [2, 0], "0": 2, "2": 1})
        );
    }
}
