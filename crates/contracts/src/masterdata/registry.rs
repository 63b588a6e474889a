//! Central registry of every master-data entity.

use super::entities::{bom, cost, general, material, operation, routing, work_center};
use super::entity::EntityDescriptor;

/// All registered entities, in module order.
pub static ENTITIES: &[&EntityDescriptor] = &[
    &general::COMPANIES,
    &general::LANGUAGES,
    &general::COUNTRIES,
    &general::CITIES,
    &general::UNITS,
    &material::MATERIAL_TYPES,
    &material::MATERIAL_HEADS,
    &material::MATERIAL_TEXTS,
    &cost::COST_CENTER_TYPES,
    &cost::COST_CENTERS,
    &cost::COST_CENTER_HEADS,
    &cost::COST_CENTER_TEXTS,
    &bom::BOM_TYPES,
    &bom::BOM_HEADS,
    &bom::BOM_CONTENTS,
    &routing::ROUTING_TYPES,
    &routing::ROUTING_HEADS,
    &routing::ROUTING_BOM_CONTENTS,
    &routing::ROUTING_OPERATION_CONTENTS,
    &work_center::WORK_CENTER_TYPES,
    &work_center::WORK_CENTER_HEADS,
    &work_center::WORK_CENTER_OPERATIONS,
    &work_center::WORK_CENTER_TEXTS,
    &operation::OPERATION_TYPES,
];

/// Look up an entity by its URL slug.
pub fn find_by_slug(slug: &str) -> Option<&'static EntityDescriptor> {
    ENTITIES.iter().copied().find(|e| e.slug == slug)
}

/// Look up an entity by its backend table name.
pub fn find_by_table(table: &str) -> Option<&'static EntityDescriptor> {
    ENTITIES.iter().copied().find(|e| e.table == table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masterdata::DeletePolicy;

    #[test]
    fn test_slugs_and_tables_are_unique() {
        for (i, a) in ENTITIES.iter().enumerate() {
            for b in &ENTITIES[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.table, b.table);
            }
        }
    }

    #[test]
    fn test_key_order_and_search_fields_are_declared() {
        for entity in ENTITIES {
            assert!(
                !entity.key_fields.is_empty() && entity.key_fields.len() <= 4,
                "{}: composite keys span 1-4 fields",
                entity.slug
            );
            assert_eq!(entity.key_fields[0], "comcode", "{}", entity.slug);
            for key in entity.key_fields {
                assert!(entity.has_field(key), "{}: missing key field {key}", entity.slug);
            }
            assert!(entity.has_field(entity.order_field), "{}", entity.slug);
            for field in entity.search_fields {
                assert!(
                    entity.has_field(field),
                    "{}: missing search field {field}",
                    entity.slug
                );
            }
        }
    }

    #[test]
    fn test_soft_delete_requires_isdeleted_column() {
        for entity in ENTITIES {
            if entity.delete_policy == DeletePolicy::Soft {
                assert!(entity.has_field("isdeleted"), "{}", entity.slug);
            }
        }
    }

    #[test]
    fn test_observed_soft_delete_entities() {
        // Only BOM heads and cost-center heads soft-delete in the console.
        let soft: Vec<&str> = ENTITIES
            .iter()
            .filter(|e| e.delete_policy == DeletePolicy::Soft)
            .map(|e| e.slug)
            .collect();
        assert_eq!(soft, vec!["cost-center-heads", "bom-heads"]);
    }

    #[test]
    fn test_find_by_slug() {
        let entity = find_by_slug("cost-center-types").unwrap();
        assert_eq!(entity.table, "bsmgrpleccm001");
        assert!(find_by_slug("no-such-entity").is_none());
    }
}
