use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scalar cell of a master-data record.
///
/// Untagged on the wire: JSON strings, integers, floats and nulls map
/// directly. Dates travel as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Display form used for composite-key strings and the searchable
    /// projection. `Null` renders empty.
    pub fn as_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Integer(v) => v.to_string(),
            Self::Number(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }

    /// True for `Null` and for whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(v) => v.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// A master-data record: field name to scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub BTreeMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Text form of a field; absent and `Null` both render empty.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_round_trip() {
        let json = r#"{"comcode":"TR01","ispassive":0,"quantity":2.5,"address2":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("comcode"), Some(&FieldValue::Text("TR01".into())));
        assert_eq!(record.get("ispassive"), Some(&FieldValue::Integer(0)));
        assert_eq!(record.get("quantity"), Some(&FieldValue::Number(2.5)));
        assert_eq!(record.get("address2"), Some(&FieldValue::Null));

        let back = serde_json::to_string(&record).unwrap();
        let reparsed: Record = serde_json::from_str(&back).unwrap();
        assert_eq!(record, reparsed);
    }

    #[test]
    fn test_blank_detection() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::Text("   ".into()).is_blank());
        assert!(!FieldValue::Text("X".into()).is_blank());
        assert!(!FieldValue::Integer(0).is_blank());
    }
}
