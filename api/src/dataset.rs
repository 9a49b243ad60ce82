use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiError, Record};

/// Immutable, cheaply cloned sequence of records. Owned by the data provider
/// for the lifetime of the page and only ever read by consumers.
#[derive(Debug, Clone, Default)]
pub struct Dataset(Arc<Vec<Record>>);

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self(Arc::new(records))
    }

    pub fn records(&self) -> &[Record] {
        self.0.as_slice()
    }
}

impl Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        self.records()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

/// Response shape served by `/data`. Older backends answer with a bare array
/// instead; [`decode_dataset`] accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEnvelope<T = Value> {
    #[serde(default)]
    pub message: String,
    pub data: Vec<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Envelope(DatasetEnvelope),
    Bare(Vec<Value>),
}

/// Decode a `/data` response body. Entries that are not record objects are
/// skipped with a warning rather than failing the whole dataset.
pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, ApiError> {
    let body: Body = serde_json::from_slice(bytes)?;
    let rows = match body {
        Body::Envelope(envelope) => {
            if !envelope.message.is_empty() {
                tracing::debug!(message = %envelope.message, "dataset envelope");
            }
            envelope.data
        }
        Body::Bare(rows) => rows,
    };

    let total = rows.len();
    let records: Vec<Record> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Record>(row) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, %err, "skipping malformed record");
                None
            }
        })
        .collect();

    tracing::info!(kept = records.len(), total, "dataset decoded");
    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_envelope_body() {
        let body = br#"{"message":"Hello from the backend!","data":[{"Country":"France"},{"Country":"Japan"}]}"#;
        let dataset = decode_dataset(body).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[1].country.as_deref(), Some("Japan"));
    }

    #[test]
    fn accepts_bare_array() {
        let body = br#"[{"Species":"Iris-setosa","SepalLengthCm":5.1}]"#;
        let dataset = decode_dataset(body).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn non_record_rows_are_skipped() {
        let body = br#"{"message":"Hello from the backend!","data":[1,2,{"Country":"Peru"}]}"#;
        let dataset = decode_dataset(body).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_dataset(b"<html>nope</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn clones_compare_equal_without_copying() {
        let dataset = Dataset::new(vec![Record::default()]);
        let clone = dataset.clone();
        assert_eq!(dataset, clone);
        assert_eq!(clone.records().as_ptr(), dataset.records().as_ptr());
    }
}
