//! Descriptor instances for every master-data table of the console.
//!
//! Field lists mirror the backend schema one to one; searchable-field
//! lists mirror what each list screen concatenates for its filter box.

pub mod bom;
pub mod cost;
pub mod general;
pub mod material;
pub mod operation;
pub mod routing;
pub mod work_center;
