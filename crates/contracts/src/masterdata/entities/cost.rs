//! Cost-center master: types, centers, head records, descriptions.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const COST_CENTER_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "cost-center-types",
    table: "bsmgrpleccm001",
    title: "Cost Center Types",
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

/// Has an `isdeleted` column but the console deletes physically.
pub const COST_CENTERS: EntityDescriptor = EntityDescriptor {
    slug: "cost-centers",
    table: "bsmgrpleccm",
    title: "Cost Centers",
    key_fields: &["comcode", "doctype"],
    order_field: "doctype",
    search_fields: &["comcode", "doctype", "doctypetext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("doctype", FieldType::Text).uppercase(),
        FieldDef::new("doctypetext", FieldType::Text),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};

pub const COST_CENTER_HEADS: EntityDescriptor = EntityDescriptor {
    slug: "cost-center-heads",
    table: "bsmgrpleccmhead",
    title: "Cost Center Heads",
    key_fields: &["comcode", "ccmdoctype", "ccmdocnum"],
    order_field: "ccmdocnum",
    search_fields: &[
        "comcode",
        "ccmdoctype",
        "ccmdocnum",
        "mainccmdoctype",
        "mainccmdocnum",
    ],
    delete_policy: DeletePolicy::Soft,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("ccmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("ccmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("ccmdocfrom", FieldType::Date),
        FieldDef::new("ccmdocuntil", FieldType::Date),
        FieldDef::new("mainccmdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("mainccmdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};

pub const COST_CENTER_TEXTS: EntityDescriptor = EntityDescriptor {
    slug: "cost-center-texts",
    table: "bsmgrpleccmtext",
    title: "Cost Center Descriptions",
    key_fields: &["comcode", "ccmdoctype", "ccmdocnum", "lancode"],
    // The original description list orders by company code.
    order_field: "comcode",
    search_fields: &["comcode", "ccmdoctype", "ccmdocnum", "ccmstext", "ccmltext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("ccmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("ccmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("ccmdocfrom", FieldType::Date),
        FieldDef::new("ccmdocuntil", FieldType::Date),
        FieldDef::new("lancode", FieldType::Text).uppercase(),
        FieldDef::new("ccmstext", FieldType::Text),
        FieldDef::new("ccmltext", FieldType::Text).optional(),
    ],
};
