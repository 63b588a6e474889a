use serde::{Deserialize, Serialize};

/// Scalar type of a master-data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text, stored as TEXT.
    Text,
    /// ISO-8601 date, stored as TEXT. Validity windows use this.
    Date,
    /// 0/1 flag, stored as INTEGER (ispassive, isdeleted, ismainunit, ...).
    Flag,
    /// Whole number, stored as INTEGER (contentnum, oprnum, supplytype).
    Integer,
    /// Decimal quantity/duration, stored as REAL.
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Flag => "flag",
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

/// One column of an entity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Required fields must be present and non-blank on create.
    pub required: bool,
    /// Natural-key/code fields are upper-cased before any write.
    pub uppercase: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            uppercase: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}
