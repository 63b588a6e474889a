//! Bill-of-materials master: types, head records, content lines.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const BOM_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "bom-types",
    table: "bsmgrplebom001",
    title: "BOM Types",
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

pub const BOM_HEADS: EntityDescriptor = EntityDescriptor {
    slug: "bom-heads",
    table: "bsmgrplebomhead",
    title: "BOM Heads",
    key_fields: &["comcode", "bomdoctype", "bomdocnum"],
    order_field: "bomdocnum",
    search_fields: &["comcode", "bomdoctype", "bomdocnum", "matdocnum", "drawnum"],
    delete_policy: DeletePolicy::Soft,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("bomdoctype", FieldType::Text).uppercase(),
        FieldDef::new("bomdocnum", FieldType::Text).uppercase(),
        FieldDef::new("bomdocfrom", FieldType::Date),
        FieldDef::new("bomdocuntil", FieldType::Date),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("quantity", FieldType::Number),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
        FieldDef::new("drawnum", FieldType::Text).optional().uppercase(),
    ],
};

pub const BOM_CONTENTS: EntityDescriptor = EntityDescriptor {
    slug: "bom-contents",
    table: "bsmgrplebomcontent",
    title: "BOM Contents",
    key_fields: &["comcode", "bomdoctype", "bomdocnum", "contentnum"],
    order_field: "bomdocnum",
    search_fields: &[
        "comcode",
        "bomdoctype",
        "bomdocnum",
        "matdoctype",
        "matdocnum",
        "component",
        "compbomdoctype",
        "compbomdocnum",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("bomdoctype", FieldType::Text).uppercase(),
        FieldDef::new("bomdocnum", FieldType::Text).uppercase(),
        FieldDef::new("bomdocfrom", FieldType::Date),
        FieldDef::new("bomdocuntil", FieldType::Date),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("contentnum", FieldType::Integer),
        FieldDef::new("component", FieldType::Text).uppercase(),
        FieldDef::new("compbomdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("compbomdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("quantity", FieldType::Number),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};
