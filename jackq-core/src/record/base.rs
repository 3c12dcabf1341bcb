//! Base implementation of records for logging.
use crate::error::JackqError;
use std::{collections::HashMap, fmt};

/// Possible types of values in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single value, typically a metric.
    Scalar(f32),

    /// A text value, e.g. the result of an episode.
    String(String),
}

/// A container of key-value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges another record into this one.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, JackqError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(JackqError::RecordValueTypeError("Scalar".to_string())),
            None => Err(JackqError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, JackqError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(JackqError::RecordValueTypeError("String".to_string())),
            None => Err(JackqError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns `true` if the record contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of key-value pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Formats values as `key = value`, sorted by key.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.0.keys().collect::<Vec<_>>();
        keys.sort();
        let items = keys
            .into_iter()
            .map(|k| match &self.0[k] {
                RecordValue::Scalar(v) => format!("{} = {:.4}", k, v),
                RecordValue::String(s) => format!("{} = {}", k, s),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_wrong_type_or_key() {
        let record = Record::from_slice(&[
            ("epsilon", RecordValue::Scalar(0.5)),
            ("result", RecordValue::String("bust".to_string())),
        ]);

        assert_eq!(record.get_scalar("epsilon"), Ok(0.5));
        assert_eq!(record.get_string("result"), Ok("bust".to_string()));
        assert_eq!(
            record.get_scalar("result"),
            Err(JackqError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_string("policy"),
            Err(JackqError::RecordKeyError("policy".to_string()))
        );
    }

    #[test]
    fn test_merge_overwrites() {
        let mut a = Record::from_scalar("x", 1.0);
        let mut b = Record::from_scalar("x", 2.0);
        b.insert("y", RecordValue::String("tie".to_string()));

        a.merge_inplace(b);
        assert_eq!(a.get_scalar("x"), Ok(2.0));
        assert_eq!(a.get_string("y"), Ok("tie".to_string()));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_display_is_sorted() {
        let record = Record::from_slice(&[
            ("win_rate", RecordValue::Scalar(0.25)),
            ("episode", RecordValue::Scalar(10.0)),
        ]);
        assert_eq!(format!("{}", record), "episode = 10.0000, win_rate = 0.2500");
    }
}
