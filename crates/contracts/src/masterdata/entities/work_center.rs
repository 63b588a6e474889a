//! Work-center master: types, head records, operation assignments,
//! descriptions.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const WORK_CENTER_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "work-center-types",
    table: "bsmgrplewcm001",
    title: "Work Center Types",
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

pub const WORK_CENTER_HEADS: EntityDescriptor = EntityDescriptor {
    slug: "work-center-heads",
    table: "bsmgrplewcmhead",
    title: "Work Centers",
    key_fields: &["comcode", "wcmdoctype", "wcmdocnum"],
    order_field: "wcmdocnum",
    search_fields: &[
        "comcode",
        "wcmdoctype",
        "wcmdocnum",
        "mainwcmdoctype",
        "mainwcmdocnum",
        "ccmdoctype",
        "ccmdocnum",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("wcmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocfrom", FieldType::Date),
        FieldDef::new("wcmdocuntil", FieldType::Date),
        FieldDef::new("mainwcmdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("mainwcmdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("ccmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("ccmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("worktime", FieldType::Number),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};

pub const WORK_CENTER_OPERATIONS: EntityDescriptor = EntityDescriptor {
    slug: "work-center-operations",
    table: "bsmgrplewcmopr",
    title: "Work Center Operations",
    key_fields: &["comcode", "wcmdoctype", "wcmdocnum", "oprdoctype"],
    order_field: "wcmdocnum",
    search_fields: &["comcode", "wcmdoctype", "wcmdocnum", "oprdoctype"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("wcmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocfrom", FieldType::Date),
        FieldDef::new("wcmdocuntil", FieldType::Date),
        FieldDef::new("oprdoctype", FieldType::Text).uppercase(),
    ],
};

pub const WORK_CENTER_TEXTS: EntityDescriptor = EntityDescriptor {
    slug: "work-center-texts",
    table: "bsmgrplewcmtext",
    title: "Work Center Descriptions",
    key_fields: &["comcode", "wcmdoctype", "wcmdocnum", "lancode"],
    order_field: "wcmdocnum",
    search_fields: &[
        "comcode",
        "wcmdoctype",
        "wcmdocnum",
        "lancode",
        "wcmstext",
        "wcmltext",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("wcmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocfrom", FieldType::Date),
        FieldDef::new("wcmdocuntil", FieldType::Date),
        FieldDef::new("lancode", FieldType::Text).uppercase(),
        FieldDef::new("wcmstext", FieldType::Text),
        FieldDef::new("wcmltext", FieldType::Text).optional(),
    ],
};
