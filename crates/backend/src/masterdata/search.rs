use contracts::masterdata::{EntityDescriptor, Record};

/// Lowercased concatenation of the entity's searchable fields.
pub fn searchable_text(entity: &EntityDescriptor, record: &Record) -> String {
    entity
        .search_fields
        .iter()
        .map(|field| record.text(field))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive multi-term match against the searchable projection.
///
/// The query is split on whitespace and every term must be a substring
/// of the projection. A blank query matches everything.
pub fn matches(entity: &EntityDescriptor, record: &Record, query: &str) -> bool {
    let haystack = searchable_text(entity, record);
    query
        .split_whitespace()
        .all(|term| haystack.contains(&term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masterdata::entities::general::UNITS;

    fn bolt_unit() -> Record {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("unitcode", "BOX10");
        record.set("unittext", "Box of 10 bolts");
        record.set("ismainunit", 0i64);
        record
    }

    #[test]
    fn test_every_term_must_match() {
        let record = bolt_unit();
        assert!(matches(&UNITS, &record, "bolt 10"));
        assert!(!matches(&UNITS, &record, "bolt 20"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let record = bolt_unit();
        assert!(matches(&UNITS, &record, "BOLT box"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let record = bolt_unit();
        assert!(matches(&UNITS, &record, ""));
        assert!(matches(&UNITS, &record, "   "));
    }

    #[test]
    fn test_non_searchable_fields_are_invisible() {
        // UNITS projects only unitcode and unittext.
        let record = bolt_unit();
        assert!(!matches(&UNITS, &record, "ismainunit"));
    }
}
