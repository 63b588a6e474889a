use std::collections::HashMap;

use contracts::masterdata::{EntityDescriptor, FieldDef, FieldType, FieldValue, Record};

use super::error::MasterDataError;

/// Separator used by the encoded single-string key form.
pub const KEY_SEPARATOR: char = '|';

/// Ordered key-field values identifying exactly one record of an entity.
///
/// Parts follow the descriptor's `key_fields` order and carry the same
/// normalization as stored data, so two keys compare equal exactly when
/// they address the same row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeKey {
    parts: Vec<(&'static str, FieldValue)>,
}

impl CompositeKey {
    /// Build a key from a full record, e.g. before insert or update.
    pub fn from_record(
        entity: &EntityDescriptor,
        record: &Record,
    ) -> Result<Self, MasterDataError> {
        let mut parts = Vec::with_capacity(entity.key_fields.len());
        for name in entity.key_fields {
            let def = entity
                .field(name)
                .ok_or_else(|| MasterDataError::validation(*name, "not a declared field"))?;
            let value = record.get(name).cloned().unwrap_or(FieldValue::Null);
            parts.push((*name, key_value(def, value)?));
        }
        Ok(Self { parts })
    }

    /// Build a key from per-field query parameters.
    pub fn from_query(
        entity: &EntityDescriptor,
        params: &HashMap<String, String>,
    ) -> Result<Self, MasterDataError> {
        let mut parts = Vec::with_capacity(entity.key_fields.len());
        for name in entity.key_fields {
            let def = entity
                .field(name)
                .ok_or_else(|| MasterDataError::validation(*name, "not a declared field"))?;
            let raw = params
                .get(*name)
                .ok_or_else(|| MasterDataError::validation(*name, "key field is required"))?;
            parts.push((*name, parse_part(def, raw)?));
        }
        Ok(Self { parts })
    }

    /// Single-string form: part values joined with `|` in key order.
    pub fn encode(&self) -> String {
        self.parts
            .iter()
            .map(|(_, v)| v.as_text())
            .collect::<Vec<_>>()
            .join(&KEY_SEPARATOR.to_string())
    }

    /// Parse the single-string form produced by [`encode`](Self::encode).
    pub fn decode(entity: &EntityDescriptor, encoded: &str) -> Result<Self, MasterDataError> {
        let raw: Vec<&str> = encoded.split(KEY_SEPARATOR).collect();
        if raw.len() != entity.key_fields.len() {
            return Err(MasterDataError::validation(
                "key",
                format!("expected {} parts", entity.key_fields.len()),
            ));
        }
        let mut parts = Vec::with_capacity(raw.len());
        for (name, part) in entity.key_fields.iter().zip(raw) {
            let def = entity
                .field(name)
                .ok_or_else(|| MasterDataError::validation(*name, "not a declared field"))?;
            parts.push((*name, parse_part(def, part)?));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[(&'static str, FieldValue)] {
        &self.parts
    }
}

fn key_value(def: &FieldDef, value: FieldValue) -> Result<FieldValue, MasterDataError> {
    if value.is_blank() {
        return Err(MasterDataError::validation(def.name, "key field is required"));
    }
    match (def.field_type, value) {
        (FieldType::Integer, FieldValue::Integer(v)) => Ok(FieldValue::Integer(v)),
        (FieldType::Integer, _) => Err(MasterDataError::validation(def.name, "must be an integer")),
        (_, FieldValue::Text(v)) => Ok(FieldValue::Text(if def.uppercase {
            v.to_uppercase()
        } else {
            v
        })),
        (_, _) => Err(MasterDataError::validation(def.name, "must be text")),
    }
}

fn parse_part(def: &FieldDef, raw: &str) -> Result<FieldValue, MasterDataError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MasterDataError::validation(def.name, "key field is required"));
    }
    match def.field_type {
        FieldType::Integer => raw
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| MasterDataError::validation(def.name, "must be an integer")),
        _ => Ok(FieldValue::Text(if def.uppercase {
            raw.to_uppercase()
        } else {
            raw.to_string()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masterdata::entities::bom::{BOM_CONTENTS, BOM_TYPES};

    #[test]
    fn test_from_record_uppercases_code_parts() {
        let mut record = Record::new();
        record.set("comcode", "tr01");
        record.set("doctype", "mam");
        record.set("doctypetext", "whatever");
        let key = CompositeKey::from_record(&BOM_TYPES, &record).unwrap();
        assert_eq!(key.encode(), "TR01|MAM");
    }

    #[test]
    fn test_missing_key_part_rejected() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        let err = CompositeKey::from_record(&BOM_TYPES, &record).unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { field, .. } if field == "doctype"));
    }

    #[test]
    fn test_encode_decode_round_trip_with_integer_part() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("bomdoctype", "MAM");
        record.set("bomdocnum", "BOM001");
        record.set("contentnum", 10i64);
        let key = CompositeKey::from_record(&BOM_CONTENTS, &record).unwrap();

        let encoded = key.encode();
        assert_eq!(encoded, "TR01|MAM|BOM001|10");
        assert_eq!(CompositeKey::decode(&BOM_CONTENTS, &encoded).unwrap(), key);
    }

    #[test]
    fn test_decode_part_count_must_match() {
        assert!(CompositeKey::decode(&BOM_CONTENTS, "TR01|MAM").is_err());
    }

    #[test]
    fn test_decode_rejects_non_integer_content_number() {
        assert!(CompositeKey::decode(&BOM_CONTENTS, "TR01|MAM|BOM001|ten").is_err());
    }

    #[test]
    fn test_from_query_parses_and_normalizes() {
        let params: HashMap<String, String> = [
            ("comcode".to_string(), "tr01".to_string()),
            ("bomdoctype".to_string(), "mam".to_string()),
            ("bomdocnum".to_string(), "bom001".to_string()),
            ("contentnum".to_string(), "10".to_string()),
        ]
        .into();
        let key = CompositeKey::from_query(&BOM_CONTENTS, &params).unwrap();
        assert_eq!(key.encode(), "TR01|MAM|BOM001|10");
    }
}
