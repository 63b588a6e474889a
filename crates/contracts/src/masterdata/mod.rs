//! Declarative schemas for the master-data entities.
//!
//! Every table of the console is described by one static
//! [`EntityDescriptor`]: its composite key, field list, searchable
//! projection and delete policy. The backend's generic record manager is
//! driven entirely by these descriptors, so adding an entity means adding
//! a descriptor here, not a new CRUD module.

pub mod entities;
pub mod entity;
pub mod field;
pub mod record;
pub mod registry;

pub use entity::{DeletePolicy, EntityDescriptor};
pub use field::{FieldDef, FieldType};
pub use record::{FieldValue, Record};
