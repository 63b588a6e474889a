use contracts::masterdata::{EntityDescriptor, FieldType, FieldValue, Record};

/// Normalization for a full record about to be inserted.
///
/// On top of [`apply_partial`], absent or null flags default to 0 so a
/// fresh row never carries NULL in a flag column.
pub fn apply(entity: &EntityDescriptor, record: &mut Record) {
    apply_partial(entity, record);

    for def in entity.fields {
        if def.field_type == FieldType::Flag {
            let missing = record
                .get(def.name)
                .map_or(true, |v| matches!(v, FieldValue::Null));
            if missing {
                record.set(def.name, 0i64);
            }
        }
    }
}

/// Normalization safe for partial payloads: no defaults are invented,
/// so a field absent from the payload stays absent.
///
/// Code fields marked `uppercase` are upper-cased so that `PLT001` and
/// `plt001` address the same record. Blank optional fields are dropped
/// instead of being stored as empty strings.
pub fn apply_partial(entity: &EntityDescriptor, record: &mut Record) {
    for def in entity.fields {
        if def.uppercase {
            if let Some(FieldValue::Text(v)) = record.get(def.name) {
                let upper = v.to_uppercase();
                record.set(def.name, upper);
            }
        }
        if !def.required {
            if let Some(FieldValue::Text(v)) = record.get(def.name) {
                if v.trim().is_empty() {
                    record.remove(def.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masterdata::entities::cost::COST_CENTER_TYPES;

    #[test]
    fn test_uppercases_code_fields_only() {
        let mut record = Record::new();
        record.set("comcode", "tr01");
        record.set("doctype", "plt");
        record.set("doctypetext", "Plant cost centers");
        apply(&COST_CENTER_TYPES, &mut record);

        assert_eq!(record.text("comcode"), "TR01");
        assert_eq!(record.text("doctype"), "PLT");
        // Description is free text and keeps its casing.
        assert_eq!(record.text("doctypetext"), "Plant cost centers");
    }

    #[test]
    fn test_absent_flag_defaults_to_zero() {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        apply(&COST_CENTER_TYPES, &mut record);
        assert_eq!(record.get("ispassive"), Some(&FieldValue::Integer(0)));
    }

    #[test]
    fn test_blank_optional_field_becomes_absent() {
        use contracts::masterdata::entities::general::UNITS;

        let mut record = Record::new();
        record.set("unitcode", "PCS");
        record.set("mainunitcode", "   ");
        apply(&UNITS, &mut record);
        assert!(!record.contains("mainunitcode"));
    }

    #[test]
    fn test_explicit_flag_is_kept() {
        let mut record = Record::new();
        record.set("ispassive", 1i64);
        apply(&COST_CENTER_TYPES, &mut record);
        assert_eq!(record.get("ispassive"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_partial_does_not_invent_flags() {
        let mut record = Record::new();
        record.set("comcode", "tr01");
        apply_partial(&COST_CENTER_TYPES, &mut record);

        assert_eq!(record.text("comcode"), "TR01");
        assert!(!record.contains("ispassive"));
    }
}
