//! Routing master: types, head records, BOM lines, operation lines.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const ROUTING_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "routing-types",
    table: "bsmgrplerot001",
    title: "Routing Types",
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

pub const ROUTING_HEADS: EntityDescriptor = EntityDescriptor {
    slug: "routing-heads",
    table: "bsmgrplerothead",
    title: "Routings",
    key_fields: &["comcode", "rotdoctype", "rotdocnum"],
    order_field: "rotdocnum",
    search_fields: &["comcode", "rotdoctype", "rotdocnum", "matdoctype", "matdocnum"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("rotdoctype", FieldType::Text).uppercase(),
        FieldDef::new("rotdocnum", FieldType::Text).uppercase(),
        FieldDef::new("rotdocfrom", FieldType::Date),
        FieldDef::new("rotdocuntil", FieldType::Date),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("quantity", FieldType::Number),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
        FieldDef::new("drawnum", FieldType::Text).optional().uppercase(),
    ],
};

pub const ROUTING_BOM_CONTENTS: EntityDescriptor = EntityDescriptor {
    slug: "routing-bom-contents",
    table: "bsmgrplerotbomcontent",
    title: "Routing BOM Contents",
    key_fields: &["comcode", "rotdoctype", "rotdocnum", "contentnum"],
    order_field: "rotdocnum",
    search_fields: &[
        "comcode",
        "rotdoctype",
        "rotdocnum",
        "matdoctype",
        "matdocnum",
        "bomdoctype",
        "bomdocnum",
        "component",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("rotdoctype", FieldType::Text).uppercase(),
        FieldDef::new("rotdocnum", FieldType::Text).uppercase(),
        FieldDef::new("rotdocfrom", FieldType::Date),
        FieldDef::new("rotdocuntil", FieldType::Date),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("oprnum", FieldType::Integer),
        FieldDef::new("bomdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("bomdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("contentnum", FieldType::Integer),
        FieldDef::new("component", FieldType::Text).uppercase(),
        FieldDef::new("quantity", FieldType::Number),
    ],
};

pub const ROUTING_OPERATION_CONTENTS: EntityDescriptor = EntityDescriptor {
    slug: "routing-operation-contents",
    table: "bsmgrplerotoprcontent",
    title: "Routing Operation Contents",
    key_fields: &["comcode", "rotdoctype", "rotdocnum", "oprnum"],
    order_field: "rotdocnum",
    search_fields: &[
        "comcode",
        "rotdoctype",
        "rotdocnum",
        "matdoctype",
        "matdocnum",
        "wcmdoctype",
        "wcmdocnum",
        "oprdoctype",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("rotdoctype", FieldType::Text).uppercase(),
        FieldDef::new("rotdocnum", FieldType::Text).uppercase(),
        // The operation-content table names its window after the BOM.
        FieldDef::new("bomdocfrom", FieldType::Date),
        FieldDef::new("bomdocuntil", FieldType::Date),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("oprnum", FieldType::Integer),
        FieldDef::new("wcmdoctype", FieldType::Text).uppercase(),
        FieldDef::new("wcmdocnum", FieldType::Text).uppercase(),
        FieldDef::new("oprdoctype", FieldType::Text).uppercase(),
        FieldDef::new("setuptime", FieldType::Number),
        FieldDef::new("machinetime", FieldType::Number),
        FieldDef::new("labourtime", FieldType::Number),
    ],
};
