use chrono::NaiveDate;
use contracts::masterdata::{EntityDescriptor, FieldType, FieldValue, Record};

use super::error::MasterDataError;

/// Check a full record against its entity descriptor before insert.
///
/// Rejects fields the table does not declare, missing required fields
/// and values of the wrong scalar type. Validity-window dates are only
/// checked for format; overlapping or inverted windows are accepted,
/// the windows are informational.
pub fn validate(entity: &EntityDescriptor, record: &Record) -> Result<(), MasterDataError> {
    validate_partial(entity, record)?;

    for def in entity.fields {
        if def.required && record.get(def.name).map_or(true, FieldValue::is_blank) {
            return Err(MasterDataError::validation(def.name, "required"));
        }
    }

    Ok(())
}

/// Check only the fields a partial payload carries. Updates touch just
/// the provided columns, so absent fields are not an error here; a
/// required field that is present must still be non-blank.
pub fn validate_partial(entity: &EntityDescriptor, record: &Record) -> Result<(), MasterDataError> {
    for (name, _) in record.iter() {
        if !entity.has_field(name) {
            return Err(MasterDataError::validation(name.clone(), "unknown field"));
        }
    }

    for def in entity.fields {
        let Some(value) = record.get(def.name) else {
            continue;
        };
        if def.required && value.is_blank() {
            return Err(MasterDataError::validation(def.name, "required"));
        }
        if matches!(value, FieldValue::Null) {
            continue;
        }

        match def.field_type {
            FieldType::Text => {
                if !matches!(value, FieldValue::Text(_)) {
                    return Err(MasterDataError::validation(def.name, "must be text"));
                }
            }
            FieldType::Date => {
                let FieldValue::Text(v) = value else {
                    return Err(MasterDataError::validation(
                        def.name,
                        "must be an ISO date (YYYY-MM-DD)",
                    ));
                };
                if !v.trim().is_empty() && NaiveDate::parse_from_str(v, "%Y-%m-%d").is_err() {
                    return Err(MasterDataError::validation(
                        def.name,
                        "must be an ISO date (YYYY-MM-DD)",
                    ));
                }
            }
            FieldType::Flag => {
                if !matches!(value, FieldValue::Integer(0) | FieldValue::Integer(1)) {
                    return Err(MasterDataError::validation(def.name, "must be 0 or 1"));
                }
            }
            FieldType::Integer => {
                if !matches!(value, FieldValue::Integer(_)) {
                    return Err(MasterDataError::validation(def.name, "must be an integer"));
                }
            }
            FieldType::Number => {
                if !matches!(value, FieldValue::Integer(_) | FieldValue::Number(_)) {
                    return Err(MasterDataError::validation(def.name, "must be a number"));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masterdata::entities::bom::{BOM_HEADS, BOM_TYPES};

    fn bom_type() -> Record {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("doctype", "MAM");
        record.set("doctypetext", "Manufacturing BOM");
        record.set("ispassive", 0i64);
        record
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate(&BOM_TYPES, &bom_type()).is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut record = bom_type();
        record.set("colour", "red");
        let err = validate(&BOM_TYPES, &record).unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { field, .. } if field == "colour"));
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut record = bom_type();
        record.remove("doctypetext");
        let err = validate(&BOM_TYPES, &record).unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { field, .. } if field == "doctypetext"));
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let mut record = bom_type();
        record.set("doctypetext", "   ");
        assert!(validate(&BOM_TYPES, &record).is_err());
    }

    #[test]
    fn test_flag_must_be_zero_or_one() {
        let mut record = bom_type();
        record.set("ispassive", 2i64);
        assert!(validate(&BOM_TYPES, &record).is_err());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("bomdoctype", "MAM");
        record.set("bomdocnum", "BOM001");
        record.set("bomdocfrom", "2024-01-01");
        record.set("bomdocuntil", "31.12.9999");
        record.set("matdoctype", "HAM");
        record.set("matdocnum", "MAT001");
        record.set("quantity", 1.0);
        record.set("isdeleted", 0i64);
        record.set("ispassive", 0i64);
        let err = validate(&BOM_HEADS, &record).unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { field, .. } if field == "bomdocuntil"));
    }

    #[test]
    fn test_partial_payload_may_omit_required_fields() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("bomdoctype", "MAM");
        record.set("bomdocnum", "BOM001");
        record.set("quantity", 2.5);

        assert!(validate(&BOM_HEADS, &record).is_err());
        assert!(validate_partial(&BOM_HEADS, &record).is_ok());
    }

    #[test]
    fn test_partial_payload_still_type_checked() {
        let mut record = Record::new();
        record.set("quantity", "lots");
        let err = validate_partial(&BOM_HEADS, &record).unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { field, .. } if field == "quantity"));
    }

    #[test]
    fn test_partial_payload_rejects_blank_required_field() {
        let mut record = Record::new();
        record.set("matdocnum", "   ");
        assert!(validate_partial(&BOM_HEADS, &record).is_err());
    }

    #[test]
    fn test_integer_accepted_for_number_field() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("bomdoctype", "MAM");
        record.set("bomdocnum", "BOM001");
        record.set("bomdocfrom", "2024-01-01");
        record.set("bomdocuntil", "9999-12-31");
        record.set("matdoctype", "HAM");
        record.set("matdocnum", "MAT001");
        record.set("quantity", 5i64);
        record.set("isdeleted", 0i64);
        record.set("ispassive", 0i64);
        assert!(validate(&BOM_HEADS, &record).is_ok());
    }
}
