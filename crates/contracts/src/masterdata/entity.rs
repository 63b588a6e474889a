use serde::Serialize;

use super::field::FieldDef;

/// What `delete` does for an entity, fixed at design time.
///
/// The original console is deliberately inconsistent here: BOM heads and
/// cost-center heads mark `isdeleted = 1`, everything else removes the
/// row, even when an `isdeleted` column exists. The inconsistency is a
/// property of the system and is preserved per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Physical row removal.
    Hard,
    /// `isdeleted = 1`; the row stays addressable by key but is excluded
    /// from `list`.
    Soft,
}

/// Static description of one master-data table.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    /// URL slug, e.g. `cost-center-types`.
    pub slug: &'static str,
    /// Backend table name, e.g. `bsmgrpleccm001`.
    pub table: &'static str,
    /// Human-readable list title.
    pub title: &'static str,
    /// Ordered composite-key field names (1-4 fields, `comcode` first).
    pub key_fields: &'static [&'static str],
    /// Single field `list` orders by, ascending.
    pub order_field: &'static str,
    /// Fields concatenated into the searchable-text projection.
    pub search_fields: &'static [&'static str],
    pub delete_policy: DeletePolicy,
    pub fields: &'static [FieldDef],
}

impl EntityDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_key_field(&self, name: &str) -> bool {
        self.key_fields.contains(&name)
    }

    /// Non-key fields, the only ones an update may change.
    pub fn value_fields(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.fields.iter().filter(|f| !self.is_key_field(f.name))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
