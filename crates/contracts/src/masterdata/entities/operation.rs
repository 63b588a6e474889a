//! Operation master: type table only; operation usage lives in the
//! routing and work-center content tables.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const OPERATION_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "operation-types",
    table: "bsmgrpleopr001",
    title: "Operation Types",
    key_fields: &["comcode", "doctype"],
    order_field: "doctype",
    search_fields: &["comcode", "doctype", "doctypetext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("doctype", FieldType::Text).uppercase(),
        FieldDef::new("doctypetext", FieldType::Text),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};
