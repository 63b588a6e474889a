//! Material master: types, head records, language-coded descriptions.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const MATERIAL_TYPES: EntityDescriptor = EntityDescriptor {
    slug: "material-types",
    table: "bsmgrplemat001",
    title: "Material Types",
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

/// Material heads carry an `isdeleted` column but the console removes the
/// row physically; kept hard-delete as observed.
pub const MATERIAL_HEADS: EntityDescriptor = EntityDescriptor {
    slug: "material-heads",
    table: "bsmgrplemathead",
    title: "Materials",
    key_fields: &["comcode", "matdoctype", "matdocnum"],
    order_field: "matdocnum",
    search_fields: &["comcode", "matdoctype", "matdocnum"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("matdocfrom", FieldType::Date),
        FieldDef::new("matdocuntil", FieldType::Date),
        FieldDef::new("supplytype", FieldType::Integer),
        FieldDef::new("stunit", FieldType::Text).uppercase(),
        FieldDef::new("netweight", FieldType::Number),
        FieldDef::new("nwunit", FieldType::Text).uppercase(),
        FieldDef::new("brutweight", FieldType::Number),
        FieldDef::new("bwunit", FieldType::Text).uppercase(),
        FieldDef::new("isbom", FieldType::Flag),
        FieldDef::new("bomdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("bomdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("isroute", FieldType::Flag),
        FieldDef::new("rotdoctype", FieldType::Text).optional().uppercase(),
        FieldDef::new("rotdocnum", FieldType::Text).optional().uppercase(),
        FieldDef::new("isdeleted", FieldType::Flag),
        FieldDef::new("ispassive", FieldType::Flag),
    ],
};

pub const MATERIAL_TEXTS: EntityDescriptor = EntityDescriptor {
    slug: "material-texts",
    table: "bsmgrplemattext",
    title: "Material Descriptions",
    key_fields: &["comcode", "matdoctype", "matdocnum", "lancode"],
    order_field: "matdocnum",
    search_fields: &["comcode", "matdoctype", "matdocnum", "matstext", "matltext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("matdoctype", FieldType::Text).uppercase(),
        FieldDef::new("matdocnum", FieldType::Text).uppercase(),
        FieldDef::new("matdocfrom", FieldType::Date),
        FieldDef::new("matdocuntil", FieldType::Date),
        FieldDef::new("lancode", FieldType::Text).uppercase(),
        FieldDef::new("matstext", FieldType::Text),
        FieldDef::new("matltext", FieldType::Text).optional(),
    ],
};
