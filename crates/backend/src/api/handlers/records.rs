//! Generic record endpoints. One handler set serves every registered
//! entity; the URL slug selects the descriptor.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::masterdata::{registry, DeletePolicy, EntityDescriptor, FieldDef, Record};
use serde::{Deserialize, Serialize};

use crate::masterdata::error::MasterDataError;
use crate::masterdata::key::CompositeKey;
use crate::masterdata::manager::RecordManager;
use crate::shared::data::db::get_connection;

#[derive(Debug, Serialize)]
pub struct EntitySummary {
    pub slug: &'static str,
    pub table: &'static str,
    pub title: &'static str,
    pub key_fields: &'static [&'static str],
    pub order_field: &'static str,
    pub delete_policy: DeletePolicy,
    pub fields: &'static [FieldDef],
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

fn lookup(slug: &str) -> Result<&'static EntityDescriptor, MasterDataError> {
    registry::find_by_slug(slug).ok_or_else(|| MasterDataError::UnknownEntity(slug.to_string()))
}

/// A key arrives either as one `key=A|B|C` parameter or as one query
/// parameter per key field.
fn key_from_params(
    entity: &EntityDescriptor,
    params: &HashMap<String, String>,
) -> Result<CompositeKey, MasterDataError> {
    match params.get("key") {
        Some(encoded) => CompositeKey::decode(entity, encoded),
        None => CompositeKey::from_query(entity, params),
    }
}

/// GET /api/md
pub async fn list_entities() -> Json<Vec<EntitySummary>> {
    let summaries = registry::ENTITIES
        .iter()
        .map(|entity| EntitySummary {
            slug: entity.slug,
            table: entity.table,
            title: entity.title,
            key_fields: entity.key_fields,
            order_field: entity.order_field,
            delete_policy: entity.delete_policy,
            fields: entity.fields,
        })
        .collect();
    Json(summaries)
}

/// GET /api/md/:entity
pub async fn list(
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Record>>, MasterDataError> {
    let entity = lookup(&slug)?;
    let manager = RecordManager::new(get_connection());
    let rows = manager.list(entity, params.search.as_deref()).await?;
    Ok(Json(rows))
}

/// GET /api/md/:entity/record
pub async fn get_record(
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Record>, MasterDataError> {
    let entity = lookup(&slug)?;
    let key = key_from_params(entity, &params)?;
    let manager = RecordManager::new(get_connection());
    let record = manager.get(entity, &key).await?;
    Ok(Json(record))
}

/// POST /api/md/:entity
pub async fn create(
    Path(slug): Path<String>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, Json<Record>), MasterDataError> {
    let entity = lookup(&slug)?;
    let manager = RecordManager::new(get_connection());
    let created = manager.create(entity, record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/md/:entity
pub async fn update(
    Path(slug): Path<String>,
    Json(record): Json<Record>,
) -> Result<Json<Record>, MasterDataError> {
    let entity = lookup(&slug)?;
    let manager = RecordManager::new(get_connection());
    let updated = manager.update(entity, record).await?;
    Ok(Json(updated))
}

/// DELETE /api/md/:entity/record
pub async fn delete_record(
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<StatusCode, MasterDataError> {
    let entity = lookup(&slug)?;
    let key = key_from_params(entity, &params)?;
    let manager = RecordManager::new(get_connection());
    manager.delete(entity, &key).await?;
    Ok(StatusCode::OK)
}
