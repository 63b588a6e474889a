//! Generic master-data engine: every entity in the registry goes through
//! the same normalize / validate / key / store pipeline.

pub mod error;
pub mod key;
pub mod manager;
pub mod normalize;
pub mod search;
pub mod store;
pub mod validate;
