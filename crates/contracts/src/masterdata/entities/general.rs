//! Company-wide reference tables: companies, languages, countries,
//! cities, units of measure.

use crate::masterdata::entity::{DeletePolicy, EntityDescriptor};
use crate::masterdata::field::{FieldDef, FieldType};

pub const COMPANIES: EntityDescriptor = EntityDescriptor {
    slug: "companies",
    table: "bsmgrplegen001",
    title: "Companies",
    key_fields: &["comcode"],
    order_field: "comcode",
    search_fields: &[
        "comcode",
        "comtext",
        "address1",
        "address2",
        "citycode",
        "countrycode",
    ],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("comtext", FieldType::Text),
        FieldDef::new("address1", FieldType::Text),
        FieldDef::new("address2", FieldType::Text).optional(),
        FieldDef::new("citycode", FieldType::Text).uppercase(),
        FieldDef::new("countrycode", FieldType::Text).uppercase(),
    ],
};

pub const LANGUAGES: EntityDescriptor = EntityDescriptor {
    slug: "languages",
    table: "bsmgrplegen002",
    title: "Languages",
    key_fields: &["comcode", "lancode"],
    order_field: "lancode",
    search_fields: &["comcode", "lancode", "lantext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("lancode", FieldType::Text).uppercase(),
        FieldDef::new("lantext", FieldType::Text),
    ],
};

pub const COUNTRIES: EntityDescriptor = EntityDescriptor {
    slug: "countries",
    table: "bsmgrplegen003",
    title: "Countries",
    key_fields: &["comcode", "countrycode"],
    order_field: "countrycode",
    search_fields: &["comcode", "countrycode", "countrytext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("countrycode", FieldType::Text).uppercase(),
        FieldDef::new("countrytext", FieldType::Text),
    ],
};

pub const CITIES: EntityDescriptor = EntityDescriptor {
    slug: "cities",
    table: "bsmgrplegen004",
    title: "Cities",
    key_fields: &["comcode", "citycode"],
    order_field: "citycode",
    search_fields: &["comcode", "citycode", "citytext", "countrycode"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("citycode", FieldType::Text).uppercase(),
        FieldDef::new("citytext", FieldType::Text),
        FieldDef::new("countrycode", FieldType::Text).uppercase(),
    ],
};

pub const UNITS: EntityDescriptor = EntityDescriptor {
    slug: "units",
    table: "bsmgrplegen005",
    title: "Units of Measure",
    key_fields: &["comcode", "unitcode"],
    order_field: "unitcode",
    // The units screen searches only code and text.
    search_fields: &["unitcode", "unittext"],
    delete_policy: DeletePolicy::Hard,
    fields: &[
        FieldDef::new("comcode", FieldType::Text).uppercase(),
        FieldDef::new("unitcode", FieldType::Text).uppercase(),
        FieldDef::new("unittext", FieldType::Text),
        FieldDef::new("ismainunit", FieldType::Flag),
        FieldDef::new("mainunitcode", FieldType::Text).optional().uppercase(),
    ],
};
